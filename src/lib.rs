pub mod crc;
pub mod emv;
pub mod error;
pub mod instruction;
pub mod normalize;
pub mod payload;
pub mod reader;
