use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Mount point of the stored image files.
pub const IMAGES_PATH: &str = "/images";

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'\'')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encodes a stored file name as a single URL path segment.
pub fn image_path_segment(file_name: &str) -> String {
    utf8_percent_encode(file_name, PATH_SEGMENT).to_string()
}

/// Public URL of a stored image.
pub fn image_url(file_name: &str) -> String {
    format!("{IMAGES_PATH}/{}", image_path_segment(file_name))
}
