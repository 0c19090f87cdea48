//! Property tests run against the public API, using a sorted `Vec` as the model.

mod tree;
