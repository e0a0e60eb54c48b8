//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Import VRC alias definitions into vSTARS/vERAM facility files
///
/// Converts a VRC alias file (and optionally a position file) to XML and
/// splices the result into each facility file, writing the patched copy to
/// the paired output path.
///
/// Examples:
///   vrc2facility aliases.txt ZOB.gz ZOB-new.gz
///   vrc2facility aliases.txt ZOB.gz ZOB.gz ZNY.gz ZNY.gz
///   vrc2facility aliases.txt --pof zob.pof --config zob.v2xcfg ZOB.gz ZOB-new.gz
#[derive(Parser, Debug)]
#[command(name = "vrc2facility")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// VRC alias file to import
    pub alias_file: PathBuf,

    /// Facility files as pairs: each input .gz followed by its output path.
    /// An output equal to its input overwrites in place without prompting.
    #[arg(required = true, num_args = 2.., value_name = "IN_FACILITY OUT_FACILITY")]
    pub facility_paths: Vec<PathBuf>,

    /// VRC position (POF) file; also replaces each facility's Positions block
    #[arg(short, long, value_name = "FILE")]
    pub pof: Option<PathBuf>,

    /// Classification config (.v2xcfg); default.v2xcfg in the working
    /// directory is used when present
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Overwrite existing output files without prompting
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Pair up the positional facility paths. An odd count is a usage
    /// error, reported before any file is touched.
    pub fn facility_pairs(&self) -> Option<Vec<(PathBuf, PathBuf)>> {
        if self.facility_paths.len() % 2 != 0 {
            return None;
        }
        Some(
            self.facility_paths
                .chunks_exact(2)
                .map(|pair| (pair[0].clone(), pair[1].clone()))
                .collect(),
        )
    }
}
