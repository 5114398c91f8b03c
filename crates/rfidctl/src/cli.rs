//! Clap derive structures for the `rfidctl` CLI.
//!
//! One subcommand per configuration domain, mirroring the library's domain
//! clients, plus `system` for control commands.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// rfidctl -- configure network-attached RFID readers
#[derive(Debug, Parser)]
#[command(
    name = "rfidctl",
    version,
    about = "Configure network-attached RFID readers over their HTTP API",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Named profile from the config file
    #[arg(long, short = 'p', env = "RFIDCTL_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Reader base URL (e.g. http://192.168.4.1)
    #[arg(long, short = 'd', env = "RFIDCTL_DEVICE", global = true)]
    pub device: Option<String>,

    /// Basic-auth login
    #[arg(long, env = "RFIDCTL_LOGIN", global = true)]
    pub login: Option<String>,

    /// Basic-auth password (prompted if not configured)
    #[arg(long, env = "RFIDCTL_PASSWORD", global = true, hide_env = true)]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "RFIDCTL_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Skip the pre-flight TCP reachability probe
    #[arg(long, global = true)]
    pub no_probe: bool,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "RFIDCTL_OUTPUT",
        default_value = "json",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// RF and antenna configuration
    #[command(subcommand)]
    Rf(RfCommand),

    /// Relay board and wiegand output configuration
    #[command(subcommand, alias = "relay")]
    Periphery(PeripheryCommand),

    /// Tag identification, filtering, and notification settings
    #[command(subcommand)]
    Tags(TagsCommand),

    /// Network and Wi-Fi settings
    #[command(subcommand)]
    Net(NetCommand),

    /// Device control commands (reboot, beep, snapshot, ...)
    #[command(subcommand)]
    System(SystemCommand),
}

// ── RF domain ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum RfCommand {
    /// Read the full RF configuration
    Get,
    /// Toggle continuous (infinite) inventory scanning
    ContinuousScanning {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Set transmit power for an antenna channel
    Power {
        value: u8,
        /// Antenna channel (1-based)
        #[arg(long, default_value = "1")]
        ch: u8,
    },
    /// Enable or disable an antenna channel
    Antenna {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
        #[arg(long, default_value = "1")]
        ch: u8,
    },
    /// Enable or disable a hardware trigger input
    Trigger {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
        #[arg(long, default_value = "1")]
        ch: u8,
    },
    /// Set the trigger state value for a channel
    TriggerState {
        value: u8,
        #[arg(long, default_value = "1")]
        ch: u8,
    },
    /// Set the RF session / antenna dependency mode
    Session { value: u8 },
    /// Set the inventory repeat interval
    RepeatTime { value: u32 },
    /// Set the minimum hold time in milliseconds
    MinHoldMs { value: u32 },
}

// ── Periphery domain ─────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum PeripheryCommand {
    /// Read the full peripheral configuration
    Get,
    /// Enable or disable the relay board as a whole
    RelayUnit {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Enable or disable a relay channel (verified against echoed state)
    RelayEnable {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
        #[arg(long, default_value = "1")]
        ch: u8,
    },
    /// Bind a relay channel to an antenna (verified against echoed state)
    RelayAntennas {
        value: u8,
        #[arg(long, default_value = "1")]
        ch: u8,
    },
    /// Set the hold timer for a relay channel
    RelayTimer {
        value: u32,
        #[arg(long, default_value = "1")]
        ch: u8,
    },
    /// Enable or disable a wiegand output channel
    WiegandEnable {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
        #[arg(long, default_value = "1")]
        ch: u8,
    },
    /// Set the wiegand frame type
    WiegandType { value: u8 },
    /// Set the wiegand payload byte shift
    WiegandShiftBytes { value: u8 },
    /// Select the wiegand payload source
    WiegandSource { value: u8 },
    /// Beep once when the device boots
    BeepOnStart {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Set the wiegand logical-0 pulse timeout
    TimeoutLogical { value: u32 },
    /// Set the wiegand inter-bit timeout
    TimeoutNextBit { value: u32 },
}

// ── Tag identity domain ──────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum TagsCommand {
    /// Read the full tag identification configuration
    Get,
    /// Read the currently held tag list
    List,
    /// Set tag read validity time in milliseconds
    ValidTimeMs { value: u32 },
    /// Set tag hold time in milliseconds
    HoldTimeMs { value: u32 },
    /// Set the RSSI filter threshold (non-negative magnitude, sent negated)
    RssiFilter { value: u32 },
    /// Enable or disable the RSSI filter
    RssiFilterEnable {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Set the EPC access password
    EpcAccessPassword { value: String },
    /// Set the match value of an EPC filter
    EpcFilterValue {
        value: String,
        #[arg(long, default_value = "1")]
        filter: u8,
    },
    /// Enable or disable an EPC filter
    EpcFilterEnable {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
        #[arg(long, default_value = "1")]
        filter: u8,
    },
    /// Beep on every tag sighting
    BeepOnTag {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Mirror tag notifications onto the UART
    NotifyUart {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Emit UART notifications as JSON
    NotifyUartJson {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Prefix every notification line with a fixed string
    AddPrefix { value: String },
    /// Include the EPC length field in notifications
    AddEpcl {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Include the EPC in notifications
    AddEpc {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Include the TID length field in notifications
    AddTidl {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Include the TID in notifications
    AddTid {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Terminate notification lines with CRLF
    AddCrlf {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Include the sighting antenna number in notifications
    AddAnt {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Include the sighting RSSI in notifications
    AddRssi {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Emit periodic keep-alive messages on the UART
    NotifyUartAlive {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Set the UART baud rate for notifications
    NotifyUartSpeed { value: u32 },
    /// Set the notification target IP address
    NotifyIp { value: String },
    /// Set the notification target port
    NotifyPort { value: u16 },
    /// Set the notification delivery time limit in milliseconds
    NotifyTimeLimMs { value: u32 },
    /// Enable or disable network notifications
    NotifyEnable {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

// ── Network domain ───────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum NetCommand {
    /// Read the current network configuration and state
    Get,
    /// Enable or disable station (client) mode
    Sta {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Enable or disable access-point mode
    Ap {
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Join a Wi-Fi network
    Connect {
        ssid: String,
        /// Wi-Fi passphrase (prompted if omitted)
        #[arg(long)]
        pass: Option<String>,
        /// Keep the current association as a fallback if the join fails
        #[arg(long)]
        safe: bool,
    },
    /// Scan for visible Wi-Fi networks
    Scan,
}

// ── System commands ──────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum SystemCommand {
    /// End the current session
    Logout,
    /// Fetch the device message log
    Log,
    /// Fetch firmware version information
    Version,
    /// Reboot the device
    Reboot,
    /// Sound the onboard beeper once
    Beep,
    /// Run a single inventory pass
    InventoryOnce,
    /// Persist the current configuration to flash
    Save,
    /// Pulse relay output 1
    Relay,
}
