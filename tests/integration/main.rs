mod crawl_tests;
mod storage_tests;
