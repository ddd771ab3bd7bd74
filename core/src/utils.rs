use std::fmt;

use num_enum::TryFromPrimitive;

/// Bytes shown by `hex_preview` before eliding.
const PREVIEW_BYTES: usize = 16;

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:02x}", raw),
    }
}

/// Printable ASCII as `b"..."`, anything else as hex.
pub fn fmt_bytes(b: &[u8]) -> String {
    if !b.is_empty() && b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Space separated hex of at most `PREVIEW_BYTES` bytes, for logs.
pub fn hex_preview(b: &[u8]) -> String {
    let shown = &b[..b.len().min(PREVIEW_BYTES)];
    let mut out = shown
        .iter()
        .map(|byte| hex::encode([*byte]))
        .collect::<Vec<_>>()
        .join(" ");
    if b.len() > PREVIEW_BYTES {
        out.push_str(&format!(" .. (+{} bytes)", b.len() - PREVIEW_BYTES));
    }
    out
}

/// Full hex dump, 16 bytes per line with offsets.
pub fn hex_dump(b: &[u8]) -> String {
    b.chunks(16)
        .enumerate()
        .map(|(line, chunk)| {
            let bytes = chunk
                .iter()
                .map(|byte| hex::encode([*byte]))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{:08x}  {}", line * 16, bytes)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
