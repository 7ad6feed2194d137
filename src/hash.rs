//! Streaming multi-digest hashing
//!
//! [`MultiHasher`] is an [`io::Write`] sink that forwards every chunk it receives to
//! MD5, SHA-1, SHA-256 and SHA-512 in lock-step, so a file is read exactly once no
//! matter how many digests are wanted. Memory stays bounded by the copy buffer.

use std::fmt;
use std::io::{self, Read, Write};

use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

/// Rolling state for all four digests.
#[derive(Clone)]
pub struct MultiHasher {
    md5: md5::Context,
    sha1: Sha1,
    sha256: Sha256,
    sha512: Sha512,
}

impl MultiHasher {
    pub fn new() -> Self {
        Self {
            md5: md5::Context::new(),
            sha1: Sha1::new(),
            sha256: Sha256::new(),
            sha512: Sha512::new(),
        }
    }

    pub fn update(&mut self, chunk: &[u8]) {
        self.md5.consume(chunk);
        self.sha1.update(chunk);
        self.sha256.update(chunk);
        self.sha512.update(chunk);
    }

    pub fn finish(self) -> Digests {
        Digests {
            md5: hex::encode(self.md5.compute().0),
            sha1: hex::encode(self.sha1.finalize()),
            sha256: hex::encode(self.sha256.finalize()),
            sha512: hex::encode(self.sha512.finalize()),
        }
    }
}

impl Default for MultiHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MultiHasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Hash everything `reader` yields in a single pass.
pub fn digest_reader<R: Read + ?Sized>(reader: &mut R) -> io::Result<Digests> {
    let mut hasher = MultiHasher::new();
    io::copy(reader, &mut hasher)?;
    Ok(hasher.finish())
}

/// Final lowercase hex digests of one byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digests {
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
    pub sha512: String,
}

impl Digests {
    /// `(label, hex)` pairs in print order.
    pub fn labeled(&self) -> [(&'static str, &str); 4] {
        [
            ("MD5", self.md5.as_str()),
            ("SHA1", self.sha1.as_str()),
            ("SHA256", self.sha256.as_str()),
            ("SHA512", self.sha512.as_str()),
        ]
    }
}

impl fmt::Display for Digests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, hex) in self.labeled() {
            writeln!(f, "{}: {}", label, hex)?;
        }
        Ok(())
    }
}
