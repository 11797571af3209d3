mod merge_policy;

pub(crate) use merge_policy::builder_with_defaults;
