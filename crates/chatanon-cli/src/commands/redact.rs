use anyhow::Result;
use chatanon_security::Redactor;

pub fn handle(text: &str) -> Result<()> {
    let redacted = Redactor::new().redact_text(text);

    if redacted.is_empty() {
        println!("(dropped: reaction notification or blank text)");
    } else {
        println!("{}", redacted);
    }

    Ok(())
}
