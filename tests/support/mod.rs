#![allow(dead_code)]

pub mod classifiers;
pub mod destrank_env;
