//! Info.plist rendering for the docset bundle.

/// Render the docset manifest. The display name doubles, lower-cased, as
/// the Dash search keyword and plugin keyword.
pub fn render_plist(name: &str) -> String {
    let keyword = name.to_lowercase();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple Computer//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>CFBundleIdentifier</key>
	<string>cheatsheet</string>
	<key>CFBundleName</key>
	<string>{name}</string>
	<key>DashDocSetFamily</key>
	<string>cheatsheet</string>
	<key>DashDocSetKeyword</key>
	<string>{keyword}</string>
	<key>DashDocSetPluginKeyword</key>
	<string>{keyword}</string>
	<key>DocSetPlatformFamily</key>
	<string>cheatsheet</string>
	<key>dashIndexFilePath</key>
	<string>index.html</string>
	<key>isDashDocset</key>
	<true/>
</dict>
</plist>
"#
    )
}
