//! Network commands: ifconfig, ping, curl, wget, ssh.
//!
//! Nothing here touches the network. Output is labelled as simulated.

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment, first_operand};

/// Register the network commands.
pub fn register_network_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(IfconfigCmd));
    reg.register(Box::new(PingCmd));
    reg.register(Box::new(CurlCmd));
    reg.register(Box::new(WgetCmd));
    reg.register(Box::new(SshCmd));
}

// ---------------------------------------------------------------------------
// ifconfig
// ---------------------------------------------------------------------------

struct IfconfigCmd;
impl Command for IfconfigCmd {
    fn name(&self) -> &str {
        "ifconfig"
    }
    fn description(&self) -> &str {
        "Show network interfaces"
    }
    fn usage(&self) -> &str {
        "ifconfig"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        CommandOutput::section(
            "[SIMULATED NETWORK - NOT REAL DATA]",
            "eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>\n    \
             inet [SIMULATED]  netmask [SIMULATED]\n    \
             inet6 [SIMULATED]\n    \
             ether [SIMULATED]\n    \
             RX/TX: [SIMULATED]",
        )
    }
}

// ---------------------------------------------------------------------------
// ping
// ---------------------------------------------------------------------------

struct PingCmd;
impl Command for PingCmd {
    fn name(&self) -> &str {
        "ping"
    }
    fn description(&self) -> &str {
        "Ping a host"
    }
    fn usage(&self) -> &str {
        "ping [host]"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        let host = args.first().copied().unwrap_or("localhost");
        let mut lines = vec![format!("PING {host} ([SIMULATED]) 56 bytes of data.")];
        for seq in 1..=2 {
            lines.push(format!(
                "64 bytes from {host}: icmp_seq={seq} ttl=64 time=[SIM] ms"
            ));
        }
        lines.push(String::new());
        lines.push(format!("--- {host} ping statistics ---"));
        lines.push("2 packets transmitted, 2 received, 0% packet loss".to_string());
        CommandOutput::section("[SIMULATED PING - NOT REAL]", lines.join("\n"))
    }
}

// ---------------------------------------------------------------------------
// curl / wget
// ---------------------------------------------------------------------------

struct CurlCmd;
impl Command for CurlCmd {
    fn name(&self) -> &str {
        "curl"
    }
    fn description(&self) -> &str {
        "Fetch a URL"
    }
    fn usage(&self) -> &str {
        "curl [options] <url>"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        let url = first_operand(args).unwrap_or("(empty)");
        CommandOutput::section(
            "[SIMULATED CURL - NOT REAL]",
            format!("Fetching {url}...\nHTTP/1.1 200 OK [SIMULATED]"),
        )
    }
}

struct WgetCmd;
impl Command for WgetCmd {
    fn name(&self) -> &str {
        "wget"
    }
    fn description(&self) -> &str {
        "Download a file"
    }
    fn usage(&self) -> &str {
        "wget <url>"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        let Some(url) = args.first() else {
            return CommandOutput::error("wget: missing URL");
        };
        CommandOutput::section(
            "[SIMULATED WGET - NOT REAL]",
            format!("Connecting to {url}... [SIMULATED]\nSaved to: 'index.html' [SIMULATED]"),
        )
    }
}

// ---------------------------------------------------------------------------
// ssh
// ---------------------------------------------------------------------------

struct SshCmd;
impl Command for SshCmd {
    fn name(&self) -> &str {
        "ssh"
    }
    fn description(&self) -> &str {
        "Connect to a remote host"
    }
    fn usage(&self) -> &str {
        "ssh <host>"
    }
    fn category(&self) -> &str {
        "network"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> CommandOutput {
        let host = args.first().copied().unwrap_or("host");
        CommandOutput::text(format!(
            "[SIMULATED] ssh: Connection to {host} - not a real connection\n\
             This is a simulated terminal for portfolio purposes only."
        ))
    }
}
