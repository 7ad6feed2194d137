//! Content type detection from a file's leading bytes.

use std::io::{self, Read};

/// Number of leading bytes handed to a [`TypeSniffer`].
pub const SNIFF_LEN: usize = 8192;

/// Maps a byte prefix to a MIME label.
pub trait TypeSniffer {
    fn sniff(&self, prefix: &[u8]) -> &'static str;
}

/// Read up to `buf.len()` bytes, stopping early only at end of input.
///
/// Returns how many bytes were read; a short file is not an error.
pub fn read_prefix<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

struct Signature {
    offset: usize,
    magic: &'static [u8],
    mime: &'static str,
}

const fn sig(offset: usize, magic: &'static [u8], mime: &'static str) -> Signature {
    Signature {
        offset,
        magic,
        mime,
    }
}

const SIGNATURES: &[Signature] = &[
    sig(0, b"\x89PNG\r\n\x1a\n", "image/png"),
    sig(0, b"\xff\xd8\xff", "image/jpeg"),
    sig(0, b"GIF87a", "image/gif"),
    sig(0, b"GIF89a", "image/gif"),
    sig(0, b"%PDF-", "application/pdf"),
    sig(0, b"PK\x03\x04", "application/zip"),
    sig(0, b"PK\x05\x06", "application/zip"),
    sig(0, b"\x1f\x8b", "application/gzip"),
    sig(0, b"BZh", "application/x-bzip2"),
    sig(0, b"\xfd7zXZ\x00", "application/x-xz"),
    sig(0, b"7z\xbc\xaf\x27\x1c", "application/x-7z-compressed"),
    sig(0, b"Rar!\x1a\x07", "application/vnd.rar"),
    sig(0, b"\x28\xb5\x2f\xfd", "application/zstd"),
    sig(257, b"ustar", "application/x-tar"),
    sig(0, b"\x7fELF", "application/x-executable"),
    sig(0, b"\xcf\xfa\xed\xfe", "application/x-mach-binary"),
    sig(0, b"\xfe\xed\xfa\xcf", "application/x-mach-binary"),
    sig(0, b"MZ", "application/vnd.microsoft.portable-executable"),
    sig(0, b"\x00asm", "application/wasm"),
    sig(0, b"SQLite format 3\x00", "application/vnd.sqlite3"),
    sig(0, b"OggS", "audio/ogg"),
    sig(0, b"fLaC", "audio/flac"),
    sig(0, b"ID3", "audio/mpeg"),
];

/// Built-in sniffer backed by a table of well-known magic numbers.
///
/// Falls back to `text/plain` for printable UTF-8 and `application/octet-stream`
/// for anything else. An empty prefix is `inode/x-empty`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureSniffer;

impl TypeSniffer for SignatureSniffer {
    fn sniff(&self, prefix: &[u8]) -> &'static str {
        if prefix.is_empty() {
            return "inode/x-empty";
        }

        for s in SIGNATURES {
            if prefix.len() >= s.offset + s.magic.len()
                && &prefix[s.offset..s.offset + s.magic.len()] == s.magic
            {
                return s.mime;
            }
        }

        if !looks_like_text(prefix) {
            return "application/octet-stream";
        }

        let head = String::from_utf8_lossy(&prefix[..prefix.len().min(512)]);
        let head = head.trim_start().to_ascii_lowercase();
        if head.starts_with("<?xml") {
            "text/xml"
        } else if head.starts_with("<!doctype html") || head.starts_with("<html") {
            "text/html"
        } else {
            "text/plain"
        }
    }
}

fn looks_like_text(prefix: &[u8]) -> bool {
    let valid = match std::str::from_utf8(prefix) {
        Ok(s) => s,
        // A multi-byte sequence cut at the prefix boundary
        Err(e) if e.error_len().is_none() => {
            match std::str::from_utf8(&prefix[..e.valid_up_to()]) {
                Ok(s) => s,
                Err(_) => return false,
            }
        }
        Err(_) => return false,
    };
    !valid
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\n' | '\r' | '\t' | '\x0c'))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out at most `step` bytes per read call.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_read_prefix_short_file() {
        let mut buf = [0u8; SNIFF_LEN];
        let n = read_prefix(&mut &b"foo"[..], &mut buf).unwrap();
        assert_eq!(&buf[..n], b"foo");
    }

    #[test]
    fn test_read_prefix_fills_across_short_reads() {
        let data = vec![b'a'; SNIFF_LEN + 100];
        let mut reader = Trickle {
            data: &data,
            step: 1000,
        };
        let mut buf = [0u8; SNIFF_LEN];
        assert_eq!(read_prefix(&mut reader, &mut buf).unwrap(), SNIFF_LEN);
    }

    #[test]
    fn test_sniff_text() {
        assert_eq!(SignatureSniffer.sniff(b"foo"), "text/plain");
        assert_eq!(SignatureSniffer.sniff(b"line one\nline two\n"), "text/plain");
    }

    #[test]
    fn test_sniff_signatures() {
        assert_eq!(
            SignatureSniffer.sniff(b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR"),
            "image/png"
        );
        assert_eq!(SignatureSniffer.sniff(b"%PDF-1.7\n"), "application/pdf");
        assert_eq!(
            SignatureSniffer.sniff(b"PK\x03\x04\x14\x00"),
            "application/zip"
        );
        assert_eq!(
            SignatureSniffer.sniff(b"\x7fELF\x02\x01\x01"),
            "application/x-executable"
        );
    }

    #[test]
    fn test_sniff_tar_at_offset() {
        let mut header = vec![0u8; 512];
        header[..4].copy_from_slice(b"file");
        header[257..262].copy_from_slice(b"ustar");
        assert_eq!(SignatureSniffer.sniff(&header), "application/x-tar");
    }

    #[test]
    fn test_sniff_markup() {
        assert_eq!(
            SignatureSniffer.sniff(b"<?xml version=\"1.0\"?><a/>"),
            "text/xml"
        );
        assert_eq!(
            SignatureSniffer.sniff(b"  <!DOCTYPE html><html></html>"),
            "text/html"
        );
    }

    #[test]
    fn test_sniff_binary_and_empty() {
        assert_eq!(
            SignatureSniffer.sniff(&[0x00, 0x01, 0x02, 0xff]),
            "application/octet-stream"
        );
        assert_eq!(SignatureSniffer.sniff(b""), "inode/x-empty");
    }

    #[test]
    fn test_sniff_truncated_utf8_is_text() {
        // "é" is two bytes; cut after the first
        let mut prefix = b"caf".to_vec();
        prefix.push(0xc3);
        assert_eq!(SignatureSniffer.sniff(&prefix), "text/plain");
    }
}
