mod carousel_tests;
mod gallery_tests;
