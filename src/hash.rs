use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Digest optionally applied to the input before encoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid hash algorithm '{0}'")]
pub struct InvalidHashAlgorithm(pub String);

impl HashAlgorithm {
    pub fn digest(self, buffer: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Md5 => md5::compute(buffer).0.to_vec(),
            HashAlgorithm::Sha1 => Sha1::digest(buffer).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(buffer).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(buffer).to_vec(),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = InvalidHashAlgorithm;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(InvalidHashAlgorithm(value.to_owned())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::{HashAlgorithm, InvalidHashAlgorithm};
    use base58::{Bitcoin, Encoding};

    #[test]
    fn digest_lengths() {
        assert_eq!(HashAlgorithm::Md5.digest(b"").len(), 16);
        assert_eq!(HashAlgorithm::Sha1.digest(b"").len(), 20);
        assert_eq!(HashAlgorithm::Sha256.digest(b"").len(), 32);
        assert_eq!(HashAlgorithm::Sha512.digest(b"").len(), 64);
    }

    #[test]
    fn digest_known() {
        assert_eq!(
            HashAlgorithm::Md5.digest(b"abc"),
            [0x90, 0x01, 0x50, 0x98, 0x3c, 0xd2, 0x4f, 0xb0, 0xd6, 0x96, 0x3f, 0x7d, 0x28, 0xe1, 0x7f, 0x72]
        );
        assert_eq!(
            HashAlgorithm::Sha1.digest(b"abc"),
            [
                0xa9, 0x99, 0x3e, 0x36, 0x47, 0x06, 0x81, 0x6a, 0xba, 0x3e, 0x25, 0x71, 0x78, 0x50, 0xc2, 0x6c, 0x9c, 0xd0, 0xd8,
                0x9d
            ]
        );
        assert_eq!(
            HashAlgorithm::Sha256.digest(b"abc")[..4],
            [0xba, 0x78, 0x16, 0xbf]
        );
    }

    #[test]
    fn encode_digest() {
        let digest = HashAlgorithm::Sha256.digest(b"abc");
        let encoded = Bitcoin.encode(&digest);
        assert_eq!(Bitcoin.decode(&encoded), Ok(digest));
    }

    #[test]
    fn parse() {
        for name in ["md5", "sha1", "sha256", "sha512"] {
            assert_eq!(name.parse::<HashAlgorithm>().map(|algorithm| algorithm.to_string()), Ok(name.to_owned()));
        }
        assert_eq!("crc32".parse::<HashAlgorithm>(), Err(InvalidHashAlgorithm("crc32".to_owned())));
    }
}
