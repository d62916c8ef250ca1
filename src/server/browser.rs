use std::io;

/// Open `url` in the platform default browser. Used by the one-shot ready
/// callback and by the open-website-only action.
pub fn open_url(url: &str) -> io::Result<()> {
    open::that(url)
}
