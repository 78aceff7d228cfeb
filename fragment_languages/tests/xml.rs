use fragment_core::SplitOptions;
use fragment_languages::xml;
use similar_asserts::assert_eq;

fn split(input: &str) -> Vec<String> {
	xml().split(input, SplitOptions::trimmed())
}

#[test]
fn mixed_case_elements_stay_together() {
	let input = "
<HTML>
  <BODY>
    <p>Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed id maximus
    augue, ut tincidunt elit. Vivamus leo est, finibus egestas lobortis non,
    interdum a ipsum.</p>
  </body>
</html>
<NOTE>
  <TO>Tove</TO>
  <FROM>Jani</FROM>
  <HEADING>Reminder</HEADING>
  <BODY>Don't forget me this weekend!</BODY>
</NOTE>
";
	assert_eq!(split(input).len(), 2);
}

#[test]
fn lines_outside_elements_are_fragments() {
	let input = "<?xml version=\"1.0\"?>\n<a>\n  <b/>\n</a>\ntrailing text\n";
	assert_eq!(split(input), [
		"<?xml version=\"1.0\"?>",
		"<a>\n  <b/>\n</a>",
		"trailing text"
	]);
}

#[test]
fn closing_tag_must_name_the_opened_element() {
	let input = "<a>\n</b>\n</A>\nnext\n";
	assert_eq!(split(input), ["<a>\n</b>\n</A>", "next"]);
}
