#![allow(dead_code)]

pub mod cutout_server;
