/// Configuration file written by `style-gate init`. Parses to `Config::default()`.
#[must_use]
pub fn generate_config_template() -> String {
    r#"# style-gate configuration file

[scan]
# Directory whose sources are checked
root = "src"

# Extension of collected files, without the leading dot
extension = "java"

# Paths containing this text are skipped (empty string disables)
exclude_marker = "module-info.java"

# Extra glob patterns to skip
exclude = []

[style]
# Style checker command; {rules} becomes the rule-set path, files are appended
command = ["checkstyle", "-c", "{rules}"]

# Output lines matching this regex are counted as violations
violation_pattern = '^\[(ERROR|WARN)\]'

# One suite per rule set, run in this order
[style.suites.blocks]
rules = "src/test/java/ir/ac/kntu/style/blocks.xml"

[style.suites.naming]
rules = "src/test/java/ir/ac/kntu/style/naming.xml"

[style.suites.imports]
rules = "src/test/java/ir/ac/kntu/style/imports.xml"

[duplicates]
enabled = true
language = "java"

# Minimum number of tokens a duplicate must span
minimum_tile_size = 60

# Copy-paste detector command; files are appended
command = ["pmd", "cpd", "--language", "{language}", "--minimum-tokens", "{minimum_tile_size}"]

# Output lines matching this regex are counted as duplicates
match_pattern = '^Found a \d+ line \(\d+ tokens\) duplication'
"#
    .to_string()
}
