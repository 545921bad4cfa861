mod type_annotation_tests;
mod utils;
