pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn session_header() -> String {
    format!("lazyvec version {VERSION} -- type an expression, Ctrl-D to quit")
}
