//! `check` command.

use std::io::Write;

use addrutil_core::{is_ipv6, is_valid_cidr, is_valid_email, is_valid_ip};
use eyre::Result;

use crate::cli::{CheckArgs, CheckKind};

/// Evaluate the predicate selected by `kind`.
pub fn evaluate(kind: CheckKind, value: &str) -> bool {
    match kind {
        CheckKind::Ip => is_valid_ip(value),
        CheckKind::Cidr => is_valid_cidr(value),
        CheckKind::Ipv6 => is_ipv6(value),
        CheckKind::Email => is_valid_email(value),
    }
}

/// Run the `check` command, printing `true` or `false`.
pub fn run(args: CheckArgs, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", evaluate(args.kind, &args.value))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        assert!(evaluate(CheckKind::Ip, "192.168.1.1"));
        assert!(!evaluate(CheckKind::Ip, "not-an-ip"));
        assert!(evaluate(CheckKind::Cidr, "10.0.0.0/24"));
        assert!(!evaluate(CheckKind::Cidr, "10.0.0.0/33"));
        assert!(evaluate(CheckKind::Ipv6, "::1"));
        assert!(!evaluate(CheckKind::Ipv6, "192.168.1.1"));
        assert!(evaluate(CheckKind::Email, "ops@example.net"));
        assert!(!evaluate(CheckKind::Email, "ops@"));
    }

    #[test]
    fn test_run_output() {
        let mut out = Vec::new();
        run(
            CheckArgs {
                kind: CheckKind::Cidr,
                value: "fd00::/8".to_string(),
            },
            &mut out,
        )
        .unwrap();
        assert_eq!(out, b"true\n");
    }
}
