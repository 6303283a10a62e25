mod common;
mod standard_rules;
