use clap::Parser;

/// An ordered list of attribute names whose non-empty normalized values
/// combine into one blocking key. Order is not semantically significant for
/// correctness, but must be stable so key-names are deterministic.
pub type KeyPattern = Vec<&'static str>;

/// Fixed, process-wide resolution configuration. `keys` is the ordered list
/// of blocking-key patterns; `entity_type` is informational (the boundary's
/// record-type tag).
#[derive(Debug, Clone)]
pub struct ResolutionConfiguration {
    pub entity_type: &'static str,
    pub keys: Vec<KeyPattern>,
}

impl ResolutionConfiguration {
    /// The reference configuration for `individual` records (§6).
    pub fn individual() -> Self {
        Self {
            entity_type: "individual",
            keys: vec![
                vec!["first_name", "last_name", "birth_date"],
                vec!["middle_name", "last_name", "birth_date"],
                vec!["first_name", "birth_date"],
            ],
        }
    }
}

/// Command-line arguments for the resolver service's HTTP bootstrap.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to bind the HTTP listener to.
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: String,
}
