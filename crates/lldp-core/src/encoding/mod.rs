/// TLV header bit-packing (7-bit type, 9-bit length).
pub mod header;
/// Bounds-checked byte reader used by every decoder.
pub mod reader;
/// Byte writer for encoding into a caller-owned buffer.
pub mod writer;
