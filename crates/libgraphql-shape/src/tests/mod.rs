mod facade_tests;
