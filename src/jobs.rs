use serde::Serialize;

/// Interpreter used for every processing script.
pub const INTERPRETER: &str = "python";

/// Per-dataset naming variants the processors emit; the driver only echoes
/// these in the final summary.
pub const PROMPT_VARIANTS: [&str; 4] = ["gen", "tac", "tabc", "tabc_long"];

/// One raw-to-processed conversion task. The four jobs are fixed at compile
/// time; nothing adds, removes, or mutates a job at runtime.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetJob {
    pub name: &'static str,
    pub short_name: &'static str,
    pub script: &'static str,
    pub output_dir: &'static str,
}

/// Execution order is part of the contract: PMData, LifeSnaps, GLOBEM, AW_FB.
pub const JOBS: [DatasetJob; 4] = [
    DatasetJob {
        name: "PMData",
        short_name: "pmdata",
        script: "data/creation_scripts/pmdata_healthcare.py",
        output_dir: "data/pmdata_processed",
    },
    DatasetJob {
        name: "LifeSnaps",
        short_name: "lifesnaps",
        script: "data/creation_scripts/lifesnaps_healthcare.py",
        output_dir: "data/lifesnaps_processed",
    },
    DatasetJob {
        name: "GLOBEM",
        short_name: "globem",
        script: "data/creation_scripts/globem_healthcare.py",
        output_dir: "data/globem_processed",
    },
    DatasetJob {
        name: "AW_FB",
        short_name: "awfb",
        script: "data/creation_scripts/awfb_healthcare.py",
        output_dir: "data/awfb_processed",
    },
];

impl DatasetJob {
    /// Hub destination prefix for this job's uploads: `<user>/<short_name>`.
    pub fn hub_repo(&self, hub_user: &str) -> String {
        format!("{}/{}", hub_user, self.short_name)
    }

    /// Remote dataset names the processor will create in push mode, one per
    /// naming variant.
    pub fn hub_datasets(&self, hub_user: &str) -> Vec<String> {
        PROMPT_VARIANTS
            .iter()
            .map(|variant| format!("{}_{}", self.hub_repo(hub_user), variant))
            .collect()
    }
}
