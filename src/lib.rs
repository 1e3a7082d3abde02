#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use mapkit_mapper as mapper;
pub use mapkit_utils as utils;
