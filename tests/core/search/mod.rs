//! Search layer tests
