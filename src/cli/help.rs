pub const TOP_LONG_ABOUT: &str = "jstools fetches the YUI Compressor into ./lib and records the active version in ./.jstools.cfg.";

pub const TOP_AFTER_HELP: &str = "EXAMPLES:\n  jstools create-userconfig\n  jstools get-yuicomp\n  jstools get-yuicomp -v 2.4.6 --set-as-default\n  jstools get-yuicomp --overwrite\n  jstools install\n  jstools list\n\nFILES:\n  ./lib/yuicompressor-<version>   unpacked releases (archives are cached next to them)\n  ./.jstools.cfg                   [yui_compressor] lib = <active release dir>\n\nSETTINGS:\n  Defaults (version, download URL, directory names) live in config.toml under\n  your config directory. Use --settings to point at another file.\n\nLOGGING:\n  Set RUST_LOG=debug for diagnostic output.";

pub const GET_YUICOMP_LONG_ABOUT: &str = "Download and unpack a YUI Compressor release.\n\nRuns create-userconfig first. If ./lib/yuicompressor-<version> is missing, the\narchive is downloaded (unless already cached in ./lib), unpacked, and recorded\nas the active release in .jstools.cfg.";

pub const GET_YUICOMP_AFTER_HELP: &str = "NOTES:\n  - An existing release is left alone and reported as already downloaded.\n  - --set-as-default records an existing release as active without fetching.\n  - --overwrite deletes the release directory and unpacks it again.";

pub const INSTALL_AFTER_HELP: &str = "Runs create-userconfig, then get-yuicomp, then reports the active release.";

pub const LIST_AFTER_HELP: &str = "The release marked * is the one .jstools.cfg points at.";
