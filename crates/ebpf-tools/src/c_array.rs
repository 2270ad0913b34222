use std::fmt::Write as _;

/// Render `bytes` as a C array literal named `name`, plus a `{name}len` size constant.
pub fn c_array(name: &str, bytes: &[u8]) -> String {
    let mut s = format!("\tuint8_t\t\t{name}[] = {{");
    for (i, b) in bytes.iter().enumerate() {
        if i % 8 == 0 {
            s.push_str("\n\t\t");
        }
        let _ = write!(s, "0x{b:02x}, ");
    }
    s.push_str("\n\t};");
    let _ = write!(s, "\n\tconst size_t\t{name}len = {:#x};", bytes.len());
    s
}
