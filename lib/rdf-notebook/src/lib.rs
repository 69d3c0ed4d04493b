#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod display;
pub mod error;
pub mod graph;
pub mod io;
pub mod namespace;
pub mod sparql;
pub mod table;
pub mod visualize;

pub mod model {
    pub use oxrdf::*;
}
