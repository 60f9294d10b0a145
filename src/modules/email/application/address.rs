use email_address::EmailAddress;
use lettre::message::Mailbox;

/// True when the address is valid and the SMTP adapter can also put it in a header.
pub fn is_deliverable_address(address: &str) -> bool {
    EmailAddress::is_valid(address) && address.parse::<Mailbox>().is_ok()
}
