use crate::text::*;

#[test]
fn cleanup_markup() {
    assert_eq!(cleanup_text("<color=#FFD780FF>Dignified</color> and elegant"), "Dignified and elegant");
    assert_eq!(cleanup_text("First line\\nSecond line{SPRITE_PRESET#11001}"), "First line\nSecond line");
    assert_eq!(cleanup_text("Plain text"), "Plain text");
}

#[test]
fn ruby_tags() {
    assert_eq!(remove_ruby_tags("{RUBY_B#とうきょう}東京{RUBY_E#}へ"), "東京へ");
    assert_eq!(remove_ruby_tags("No annotations"), "No annotations");
}

#[test]
fn device_params() {
    assert_eq!(replace_device_params("{LAYOUT_MOBILE#Tap}{LAYOUT_PC#Press}{LAYOUT_PS#Push} to jump"), "Press to jump");
    assert_eq!(replace_device_params("{LAYOUT_CONSOLE#Push}{LAYOUT_FALLBACK#Tap} to jump"), "Push to jump");

    assert_eq!(
        replace_device_params("{LAYOUT_PC#Hold}{LAYOUT_MOBILE#Tap} and {LAYOUT_MOBILE#Swipe}{LAYOUT_PC#Drag}"),
        "Hold and Drag"
    );
}

#[test]
fn layout_words() {
    assert_eq!(replace_layout("{LAYOUT_MOBILE#Tap}{LAYOUT_PC#Press}{LAYOUT_PS#Push} to jump"), "Tap to jump");
    assert_eq!(replace_layout("Nothing to replace"), "Nothing to replace");
}

#[test]
fn skill_params() {
    assert_eq!(replace_params("1-Hit DMG|{param1:F1P}", &[0.445]), ["1-Hit DMG", "44.5%"]);
    assert_eq!(replace_params("Duration|{param2:F1}s", &[0.0, 6.0]), ["Duration", "6.0s"]);
    assert_eq!(replace_params("Hits|{param1:I}", &[3.0]), ["Hits", "3"]);
    assert_eq!(replace_params("Bonus|{param1:P}", &[0.2]), ["Bonus", "20%"]);

    assert_eq!(
        replace_params("Charged Attack DMG|{param1:F1P}+{param2:F1P}", &[0.553, 0.6]),
        ["Charged Attack DMG", "55.3%+60.0%"]
    );

    // Unknown index stays untouched
    assert_eq!(replace_params("DMG|{param3:F1P}", &[0.1]), ["DMG", "{param3:F1P}"]);
}

#[test]
fn placeholders() {
    assert_eq!(
        replace_placeholders("Increases ATK by #1[i]%. Lasts #2[i] turn(s).", &[0.12, 2.0]),
        "Increases ATK by 12%. Lasts 2 turn(s)."
    );

    assert_eq!(replace_placeholders("Energy +#1[f1]%", &[0.155]), "Energy +15.5%");
    assert_eq!(replace_placeholders("Heals #1[f2] HP", &[12.5]), "Heals 12.50 HP");
    assert_eq!(replace_placeholders("Stacks #1[i]", &[2.5]), "Stacks 2");
    assert_eq!(replace_placeholders("Stacks #1[i]", &[3.5]), "Stacks 4");
    assert_eq!(replace_placeholders("Missing #3[i]%", &[0.1, 0.2]), "Missing #3[i]%");

    let params = (1..=10).map(f64::from).collect::<Vec<_>>();

    assert_eq!(replace_placeholders("#10[i] and #1[i]", &params), "10 and 1");
}

#[test]
fn normalization() {
    assert_eq!(
        normalize_text("<unbreak>Robin</unbreak> {RUBY_B#うた}歌{RUBY_E#}\\n{LAYOUT_MOBILE#Tap}{LAYOUT_PC#Press}"),
        "Robin 歌\nPress"
    );

    assert_eq!(normalize_text(""), "");
}
