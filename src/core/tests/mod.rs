mod namer_tests;
