//! Image collaborator for cropping and file handling
//!
//! The geometry and tiling code never decodes pixels itself. It only needs
//! something with a size that can be cropped, described by [`ImageSource`].
//! The helpers here load, encode and crop images with the `image` crate.

mod source;
mod helpers;
pub(crate) mod export;

pub use source::ImageSource;
pub use helpers::{
    crop_by_bbox, crop_regions, get_file_binary_content, get_file_image, get_image,
    to_byte_array,
};
