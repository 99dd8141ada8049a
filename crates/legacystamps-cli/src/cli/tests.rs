use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_required_only_uses_defaults() {
    let cli = parse(&["legacystamps", "--ra", "154.7709", "--dec", "46.4537", "--bands", "grz"]);
    assert_eq!(cli.ra, 154.7709);
    assert_eq!(cli.dec, 46.4537);
    assert_eq!(cli.bands, "grz");
    assert_eq!(cli.mode, ModeArg::Jpeg);
    assert_eq!(cli.size, 0.01);
    assert_eq!(cli.layer, "ls-dr9");
    assert_eq!(cli.pixscale, 0.262);
    assert!(!cli.autoscale);
    assert!(cli.download_dir.is_none());
}

#[test]
fn cli_parse_all_flags() {
    let cli = parse(&[
        "legacystamps",
        "--ra",
        "10.5",
        "--dec=-3.25",
        "--bands",
        "g",
        "--mode",
        "fits",
        "--size",
        "0.3",
        "--layer",
        "unwise-neo4",
        "--pixscale",
        "0.5",
        "--autoscale",
        "--download-dir",
        "/tmp/stamps",
    ]);
    assert_eq!(cli.dec, -3.25);
    assert_eq!(cli.mode, ModeArg::Fits);
    assert_eq!(cli.size, 0.3);
    assert_eq!(cli.layer, "unwise-neo4");
    assert_eq!(cli.pixscale, 0.5);
    assert!(cli.autoscale);
    assert_eq!(
        cli.download_dir.as_deref(),
        Some(std::path::Path::new("/tmp/stamps"))
    );
}

#[test]
fn cli_parse_negative_declination() {
    let cli = parse(&["legacystamps", "--ra", "1", "--dec", "-12.5", "--bands", "r"]);
    assert_eq!(cli.dec, -12.5);
}

#[test]
fn cli_missing_required_flag_fails() {
    assert!(Cli::try_parse_from(["legacystamps", "--ra", "1", "--dec", "2"]).is_err());
    assert!(Cli::try_parse_from(["legacystamps", "--ra", "1", "--bands", "grz"]).is_err());
}

#[test]
fn cli_rejects_unknown_mode() {
    let res = Cli::try_parse_from([
        "legacystamps", "--ra", "1", "--dec", "2", "--bands", "grz", "--mode", "png",
    ]);
    assert!(res.is_err());
}

#[test]
fn requests_carry_flags() {
    let cli = parse(&[
        "legacystamps",
        "--ra",
        "154.7709",
        "--dec",
        "46.4537",
        "--bands",
        "grz",
        "--size",
        "0.3",
        "--autoscale",
        "--download-dir",
        "/data",
    ]);
    let requests = cli.requests();
    assert_eq!(requests.len(), 1);
    let r = &requests[0];
    assert_eq!(r.mode, Mode::Jpeg);
    assert_eq!(r.size, 0.3);
    assert!(r.autoscale);
    assert_eq!(r.output_dir.as_deref(), Some(std::path::Path::new("/data")));
}

#[test]
fn mode_both_expands_to_jpeg_then_fits() {
    let cli = parse(&[
        "legacystamps", "--ra", "1", "--dec", "2", "--bands", "grz", "--mode", "both",
    ]);
    let modes: Vec<Mode> = cli.requests().iter().map(|r| r.mode).collect();
    assert_eq!(modes, vec![Mode::Jpeg, Mode::Fits]);
    assert!(cli.requests().iter().all(|r| r.output_dir.is_none()));
}
