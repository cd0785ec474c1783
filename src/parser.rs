//! Message pipeline: raw bytes in, normalized record out
//!
//! `mailparse` handles the wire format (header folding, encoded words,
//! multipart boundaries, transfer and charset decoding). Everything derived
//! from the decoded fields goes through the normalization operations.

use crate::classify;
use crate::config::NormalizeConfig;
use crate::error::{NormalizeError, Result};
use crate::html::{normalize_html, strip_html_with};
use crate::signature::extract_signature;
use crate::subject::normalize_subject;
use crate::text::strip_plain_text_with;
use crate::types::{
    Address, Attachment, HeaderAddress, HeaderMap, ParsedEmail, Recipient, RecipientKind,
};
use chrono::{DateTime, Utc};
use mailparse::{DispositionType, MailAddr, MailHeader, MailHeaderMap, ParsedMail, SingleInfo};
use tracing::debug;

const TEXT_PLAIN: &str = "text/plain";
const TEXT_HTML: &str = "text/html";

/// Parse raw email bytes into a normalized record
pub fn parse_email(raw: &[u8]) -> Result<ParsedEmail> {
    parse_email_with(raw, &NormalizeConfig::default())
}

/// [`parse_email`] with explicit stripping configuration
pub fn parse_email_with(raw: &[u8], config: &NormalizeConfig) -> Result<ParsedEmail> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| NormalizeError::Structure(e.to_string()))?;

    let subject = parsed.headers.get_first_value("Subject");
    let from = extract_address(&parsed.headers, "From").into_address();
    let sender = match extract_address(&parsed.headers, "Sender") {
        HeaderAddress::Parsed(address) => address,
        HeaderAddress::Unparseable => Address::unknown(),
        HeaderAddress::Missing => from.clone(),
    };
    let recipients = extract_recipients(&parsed.headers);
    let headers = extract_headers(&parsed.headers);
    let date = extract_date(&parsed.headers);
    let body_plain = select_body(&parsed, TEXT_PLAIN);
    let body_html = select_body(&parsed, TEXT_HTML).map(|html| normalize_html(&html));
    let attachments = extract_attachments(&parsed);

    debug!(
        "Parsed email: {} from {}",
        subject.as_deref().unwrap_or("(no subject)"),
        from
    );

    Ok(ParsedEmail {
        is_subscription: classify::is_subscription(&headers),
        is_forwarded: classify::is_forwarded(subject.as_deref(), body_plain.as_deref()),
        stripped_text: strip_plain_text_with(body_plain.as_deref(), &config.text),
        stripped_html: strip_html_with(body_html.as_deref(), &headers, &config.html),
        stripped_subject: normalize_subject(subject.as_deref()),
        subject_has_emojis: classify::has_emojis(subject.as_deref()),
        email_signature: extract_signature(body_plain.as_deref()),
        mime_type: parsed.ctype.mimetype.to_lowercase(),
        subject,
        sender,
        from,
        recipients,
        headers,
        date,
        body_plain,
        body_html,
        attachments,
    })
}

fn to_address(info: &SingleInfo) -> Address {
    Address::new(info.addr.clone(), info.display_name.as_deref())
}

fn mailboxes(addr: &MailAddr) -> Vec<Address> {
    match addr {
        MailAddr::Single(info) => vec![to_address(info)],
        MailAddr::Group(group) => group.addrs.iter().map(to_address).collect(),
    }
}

fn extract_address(headers: &[MailHeader], header_name: &str) -> HeaderAddress {
    let Some(header) = headers.get_first_header(header_name) else {
        return HeaderAddress::Missing;
    };

    match mailparse::addrparse_header(header) {
        Ok(list) => list
            .iter()
            .flat_map(mailboxes)
            .next()
            .map_or(HeaderAddress::Missing, HeaderAddress::Parsed),
        Err(e) => {
            debug!("Unparseable {header_name} header: {e}");
            HeaderAddress::Unparseable
        }
    }
}

fn extract_recipients(headers: &[MailHeader]) -> Vec<Recipient> {
    [RecipientKind::To, RecipientKind::Cc, RecipientKind::Bcc]
        .into_iter()
        .flat_map(|kind| {
            headers
                .get_first_header(kind.header_name())
                .and_then(|h| mailparse::addrparse_header(h).ok())
                .map(|list| {
                    list.iter()
                        .flat_map(mailboxes)
                        .map(|address| Recipient::new(address, kind))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
        .collect()
}

fn extract_headers(headers: &[MailHeader]) -> HeaderMap {
    headers
        .iter()
        .map(|h| (capitalize_header_name(&h.get_key()), h.get_value()))
        .collect()
}

/// `MESSAGE-ID` and `message-id` both become `Message-Id`
fn capitalize_header_name(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn extract_date(headers: &[MailHeader]) -> Option<DateTime<Utc>> {
    headers
        .get_first_value("Date")
        .and_then(|d| DateTime::parse_from_rfc2822(d.trim()).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Single-part messages only yield a body of the matching type; multipart
/// messages yield their first non-attachment leaf of that type.
fn select_body(parsed: &ParsedMail, mime_type: &str) -> Option<String> {
    if parsed.subparts.is_empty() {
        if parsed.ctype.mimetype.eq_ignore_ascii_case(mime_type) {
            decode_body(parsed)
        } else {
            None
        }
    } else {
        find_leaf(parsed, mime_type).and_then(decode_body)
    }
}

fn find_leaf<'p, 'a>(parsed: &'p ParsedMail<'a>, mime_type: &str) -> Option<&'p ParsedMail<'a>> {
    for part in &parsed.subparts {
        if part.subparts.is_empty() {
            if part.ctype.mimetype.eq_ignore_ascii_case(mime_type) && !is_attachment(part) {
                return Some(part);
            }
        } else if let Some(found) = find_leaf(part, mime_type) {
            return Some(found);
        }
    }
    None
}

fn is_attachment(part: &ParsedMail) -> bool {
    matches!(
        part.get_content_disposition().disposition,
        DispositionType::Attachment
    )
}

fn decode_body(part: &ParsedMail) -> Option<String> {
    part.get_body()
        .map_err(|e| NormalizeError::Decode(e.to_string()))
        .inspect_err(|e| debug!("Dropping {} body: {e}", part.ctype.mimetype))
        .ok()
}

fn extract_attachments(parsed: &ParsedMail) -> Vec<Attachment> {
    let mut attachments = Vec::new();
    collect_attachments(parsed, &mut attachments);
    attachments
}

fn collect_attachments(part: &ParsedMail, attachments: &mut Vec<Attachment>) {
    if !part.subparts.is_empty() {
        for subpart in &part.subparts {
            collect_attachments(subpart, attachments);
        }
        return;
    }

    let disposition = part
        .headers
        .get_first_value("Content-Disposition")
        .map(|d| d.trim().to_lowercase())
        .unwrap_or_default();
    let name = attachment_filename(part);

    if name.is_none() && disposition.starts_with("inline") {
        return;
    }

    let mime_type = part.ctype.mimetype.to_lowercase();
    if disposition.is_empty() && (mime_type == TEXT_PLAIN || mime_type == TEXT_HTML) {
        return;
    }

    let size = part.get_body_raw().map_or(0, |body| body.len());

    attachments.push(Attachment {
        name,
        mime_type,
        size,
    });
}

/// Content-Type `name`, then Content-Disposition `filename`, then
/// Content-Location
fn attachment_filename(part: &ParsedMail) -> Option<String> {
    part.ctype
        .params
        .get("name")
        .cloned()
        .or_else(|| part.get_content_disposition().params.get("filename").cloned())
        .or_else(|| part.headers.get_first_value("Content-Location"))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}
