#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use segviz_image as image;

#[doc(inline)]
pub use segviz_imgproc as imgproc;

#[doc(inline)]
pub use segviz_io as io;
