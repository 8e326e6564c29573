/// Conversion between encoded images / `image` buffers and packed frames.
pub(crate) mod decode;
