mod segments_tests;
