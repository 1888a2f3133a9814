//! Binary fixtures for tests.

/// A GZip-compressed document: a compound named "hello world" containing one
/// String entry, "name" = "Bananrama".
pub const HELLO_WORLD_GZ: &[u8] = include_bytes!("resources/hello_world.nbt.gz");
