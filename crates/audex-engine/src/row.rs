/// Column headers of the export, in output order
pub const OUTPUT_HEADER: [&str; 15] = [
    "Host",
    "Database",
    "SID",
    "Serial",
    "Logged In",
    "Logged Out",
    "DB User",
    "SQL Start Time",
    "SQL Start Time(Micro Sec)",
    "SQL Text",
    "Bind Variables",
    "Object",
    "Elapsed Time",
    "Program",
    "Client Information - Host",
];

/// One export row: a QUERY event joined with its session bounds.
///
/// Serial, bind variables, object, elapsed time, and program are not
/// derivable from this log source; they stay as empty placeholder columns
/// so the export keeps the fixed 15-column shape downstream tooling expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub host: String,
    pub database: String,
    pub session_id: String,
    pub logged_in: String,
    /// Empty when the session has no inferred logout time
    pub logged_out: String,
    pub db_user: String,
    /// Event time at second granularity
    pub sql_start_time: String,
    /// Sub-second remainder of the event time, plain integer string
    pub sql_start_micros: String,
    pub sql_text: String,
    pub client_host: String,
}

impl OutputRow {
    /// The 15 columns in output order, placeholders included
    pub fn as_record(&self) -> [&str; 15] {
        [
            &self.host,
            &self.database,
            &self.session_id,
            "", // Serial
            &self.logged_in,
            &self.logged_out,
            &self.db_user,
            &self.sql_start_time,
            &self.sql_start_micros,
            &self.sql_text,
            "", // Bind Variables
            "", // Object
            "", // Elapsed Time
            "", // Program
            &self.client_host,
        ]
    }
}
