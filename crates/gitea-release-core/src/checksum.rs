//! Checksum calculation and sidecar checksum file generation

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use std::fmt::LowerHex;

use blake2::digest::consts::U32;
use blake2::{Blake2b, Blake2s256};
use md5::Md5;
use sha1::Sha1;
use sha2::digest::Output;
use sha2::{Digest, Sha256, Sha512};

use crate::error::{Error, Result};

type Blake2b256 = Blake2b<U32>;

fn digest<D: Digest>(data: &[u8]) -> String
where
    Output<D>: LowerHex,
{
    format!("{:x}", D::new_with_prefix(data).finalize())
}

/// Calculate the checksum of the given reader using the specified hash method.
///
/// Supported hash methods are: "md5", "sha1", "sha256", "sha512", "adler32",
/// "crc32", "blake2b", "blake2s".
pub fn checksum<R: Read>(mut reader: R, method: &str) -> Result<String> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    match method {
        "md5" => Ok(digest::<Md5>(&data)),
        "sha1" => Ok(digest::<Sha1>(&data)),
        "sha256" => Ok(digest::<Sha256>(&data)),
        "sha512" => Ok(digest::<Sha512>(&data)),
        "adler32" => Ok(format!("{:08x}", adler::adler32_slice(&data))),
        "crc32" => Ok(format!("{:08x}", crc32fast::hash(&data))),
        "blake2b" => Ok(digest::<Blake2b256>(&data)),
        "blake2s" => Ok(digest::<Blake2s256>(&data)),
        other => Err(Error::unsupported_checksum(other)),
    }
}

/// Calculate checksums for the given files with the specified hash methods and
/// write them to sidecar files named after the methods (e.g. "md5sum.txt").
///
/// Each sidecar file contains one `<hex-digest>  <file-path>` line per input
/// file. Returns the input list with the generated sidecar paths appended.
pub fn write_checksums<P: AsRef<Path>>(
    files: &[String],
    methods: &[String],
    out_dir: P,
) -> Result<Vec<String>> {
    let mut result = files.to_vec();

    // Nothing to sum: no sidecars are generated either.
    if files.is_empty() {
        return Ok(result);
    }

    for method in methods {
        let sidecar = out_dir.as_ref().join(format!("{method}sum.txt"));
        let mut out = File::create(&sidecar)?;

        for file in files {
            let handle =
                File::open(file).map_err(|err| Error::read_file(file.clone(), err))?;
            let hash = checksum(handle, method)?;

            writeln!(out, "{hash}  {file}")?;
        }

        result.push(sidecar.to_string_lossy().into_owned());
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn checksum_known_vectors() {
        let cases = [
            ("md5", "5d41402abc4b2a76b9719d911017c592"),
            ("sha1", "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"),
            (
                "sha256",
                "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
            ),
            (
                "sha512",
                "9b71d224bd62f3785d96d46ad3ea3d73319bfbc2890caadae2dff72519673ca72323c3d99ba5c11d7c7acc6e14b8c5da0c4663475c2e5c3adef46f73bcdec043",
            ),
            ("adler32", "062c0215"),
            ("crc32", "3610a686"),
            (
                "blake2b",
                "324dcf027dd4a30a932c441f365a25e86b173defa4b8e58948253471b81b72cf",
            ),
            (
                "blake2s",
                "19213bacc58dee6dbde3ceb9a47cbb330b3d86f8cca8997eb00be456f140ca25",
            ),
        ];

        for (method, expected) in cases {
            let sum = checksum(&b"hello"[..], method).unwrap();
            assert_eq!(sum, expected, "method {method}");
        }
    }

    #[test]
    fn checksum_unsupported_method() {
        let err = checksum(&b"hello"[..], "unsupported").unwrap_err();
        assert!(matches!(err, Error::UnsupportedChecksum { .. }));
        assert!(err.to_string().contains("unsupported"));
    }

    #[test]
    fn write_checksums_generates_sidecars() {
        let dir = tempfile::tempdir().unwrap();
        let files: Vec<String> = ["file1.txt", "file2.txt"]
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                fs::write(&path, b"hello").unwrap();
                path.to_string_lossy().into_owned()
            })
            .collect();

        let methods = vec!["md5".to_string(), "sha256".to_string()];
        let result = write_checksums(&files, &methods, dir.path()).unwrap();

        // Originals first, then one sidecar per method in request order.
        assert_eq!(result.len(), 4);
        assert_eq!(&result[..2], &files[..]);
        assert!(result[2].ends_with("md5sum.txt"));
        assert!(result[3].ends_with("sha256sum.txt"));

        let md5sum = fs::read_to_string(&result[2]).unwrap();
        assert_eq!(
            md5sum,
            format!(
                "5d41402abc4b2a76b9719d911017c592  {}\n5d41402abc4b2a76b9719d911017c592  {}\n",
                files[0], files[1]
            )
        );

        let sha256sum = fs::read_to_string(&result[3]).unwrap();
        assert!(sha256sum
            .lines()
            .all(|line| line.starts_with(
                "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824  "
            )));
    }

    #[test]
    fn write_checksums_empty_methods() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("file1.txt");
        fs::write(&path, b"hello").unwrap();
        let files = vec![path.to_string_lossy().into_owned()];

        let result = write_checksums(&files, &[], dir.path()).unwrap();
        assert_eq!(result, files);
    }

    #[test]
    fn write_checksums_empty_files_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let methods = vec!["md5".to_string(), "sha256".to_string()];

        let result = write_checksums(&[], &methods, dir.path()).unwrap();

        assert!(result.is_empty());
        assert!(!dir.path().join("md5sum.txt").exists());
        assert!(!dir.path().join("sha256sum.txt").exists());
    }

    #[test]
    fn write_checksums_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![dir
            .path()
            .join("non_existent.txt")
            .to_string_lossy()
            .into_owned()];
        let methods = vec!["md5".to_string()];

        let err = write_checksums(&files, &methods, dir.path()).unwrap_err();
        assert!(matches!(err, Error::ReadFile { .. }));
        assert!(err.to_string().contains("non_existent.txt"));
    }
}
