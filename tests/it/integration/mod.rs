mod auto_scroll_tests;
