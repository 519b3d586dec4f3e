use assert_cmd::Command;

pub fn hilite_cmd() -> Command {
	let mut cmd = Command::cargo_bin("hilite").expect("hilite binary builds");
	cmd.env("NO_COLOR", "1");
	cmd
}
