use clap::Parser;

/// base58 encodes and decodes base58 data (as used in Bitcoin addresses). With
/// no options, base58 reads raw data from stdin and writes encoded data to
/// stdout.
#[derive(Parser, Debug, Default)]
#[clap(name = "base58", version)]
pub struct Opts {
    /// Read base58 data and output binary data.
    #[clap(long)]
    pub decode: bool,

    /// Use a fixed-length padding scheme instead of the Bitcoin scheme.
    #[clap(long)]
    pub fixed: bool,

    /// Hash the input. Valid algorithms: md5, sha1, sha256, sha512
    #[clap(long, value_name = "ALGORITHM")]
    pub hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Opts;
    use clap::{CommandFactory, Parser};

    #[test]
    fn command() {
        Opts::command().debug_assert();
    }

    #[test]
    fn parse() {
        let opts = Opts::try_parse_from(["base58", "--fixed", "--hash", "sha256"]).unwrap();
        assert!(!opts.decode);
        assert!(opts.fixed);
        assert_eq!(opts.hash.as_deref(), Some("sha256"));

        let opts = Opts::try_parse_from(["base58", "--decode"]).unwrap();
        assert!(opts.decode);
        assert!(!opts.fixed);
        assert_eq!(opts.hash, None);
    }

    #[test]
    fn parse_unknown_flag() {
        assert!(Opts::try_parse_from(["base58", "--checksum"]).is_err());
    }
}
