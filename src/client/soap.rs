//! SOAP 1.1 envelope build and parse for FNSNDSCAWS_2.
//!
//! Request: one `NP` element per entry with `INN` and `DT` attributes.
//! Response: `NP` elements with `INN` and `STATE` attributes; a SOAP
//! `faultstring` becomes a [`RegistryError::Service`].

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::core::{QueryBatch, RegistryError, StatusResult};

const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";
const REQUEST_NS: &str = "http://ws.unisoft/FNSNDSCAWS2/Request";

fn xml_io(e: std::io::Error) -> RegistryError {
    RegistryError::Parse(format!("XML write error: {e}"))
}

/// Serialize a batch into an `NdsRequest2` SOAP envelope.
pub(crate) fn build_request(batch: &QueryBatch) -> Result<String, RegistryError> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_io)?;

    let mut envelope = BytesStart::new("soapenv:Envelope");
    envelope.push_attribute(("xmlns:soapenv", SOAP_ENV_NS));
    envelope.push_attribute(("xmlns:req", REQUEST_NS));
    writer.write_event(Event::Start(envelope)).map_err(xml_io)?;
    writer
        .write_event(Event::Start(BytesStart::new("soapenv:Body")))
        .map_err(xml_io)?;
    writer
        .write_event(Event::Start(BytesStart::new("req:NdsRequest2")))
        .map_err(xml_io)?;

    for entry in batch.entries() {
        let mut np = BytesStart::new("req:NP");
        np.push_attribute(("INN", entry.inn.as_str()));
        np.push_attribute(("DT", entry.wire_date().as_str()));
        writer.write_event(Event::Empty(np)).map_err(xml_io)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("req:NdsRequest2")))
        .map_err(xml_io)?;
    writer
        .write_event(Event::End(BytesEnd::new("soapenv:Body")))
        .map_err(xml_io)?;
    writer
        .write_event(Event::End(BytesEnd::new("soapenv:Envelope")))
        .map_err(xml_io)?;

    let buf = writer.into_inner().into_inner();
    String::from_utf8(buf).map_err(|e| RegistryError::Parse(format!("XML UTF-8 error: {e}")))
}

/// Parse an `NdsResponse2` envelope into status results.
///
/// A `faultstring` anywhere in the document wins over any `NP` elements.
pub(crate) fn parse_response(xml: &str) -> Result<Vec<StatusResult>, RegistryError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut results = Vec::new();
    let mut in_fault_string = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                match e.local_name().as_ref() {
                    b"NP" => results.push(parse_np(e)?),
                    b"faultstring" => in_fault_string = true,
                    _ => {}
                }
            }
            Ok(Event::Text(ref e)) if in_fault_string => {
                let fault = e.unescape().unwrap_or_default().to_string();
                return Err(RegistryError::Service(fault));
            }
            Ok(Event::End(ref e)) if e.local_name().as_ref() == b"faultstring" => {
                in_fault_string = false;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(RegistryError::Parse(e.to_string())),
            _ => {}
        }
    }

    Ok(results)
}

fn parse_np(e: &BytesStart<'_>) -> Result<StatusResult, RegistryError> {
    let mut inn = None;
    let mut state = None;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref()).unwrap_or("");
        let val = std::str::from_utf8(&attr.value).unwrap_or("").to_string();
        match key {
            "INN" => inn = Some(val),
            "STATE" => state = Some(val),
            _ => {}
        }
    }

    let inn = inn.ok_or_else(|| RegistryError::Parse("NP element without INN".into()))?;
    let state = state.ok_or_else(|| RegistryError::Parse("NP element without STATE".into()))?;
    let code = state
        .parse::<i32>()
        .map_err(|_| RegistryError::Parse(format!("non-numeric STATE '{state}'")))?;

    Ok(StatusResult { inn, code })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Inn, QueryEntry};
    use chrono::NaiveDate;

    fn batch() -> QueryBatch {
        let date = NaiveDate::from_ymd_opt(2020, 1, 5).unwrap();
        QueryBatch::from_entries([
            QueryEntry::new(Inn::parse("7713011336").unwrap(), date),
            QueryEntry::new(Inn::parse("672204588096").unwrap(), date),
        ])
    }

    #[test]
    fn request_carries_one_np_per_entry() {
        let xml = build_request(&batch()).unwrap();
        assert!(xml.contains(r#"<req:NP INN="7713011336" DT="05.01.2020"/>"#));
        assert!(xml.contains(r#"<req:NP INN="672204588096" DT="05.01.2020"/>"#));
        assert_eq!(xml.matches("<req:NP").count(), 2);
    }

    #[test]
    fn request_declares_namespaces() {
        let xml = build_request(&batch()).unwrap();
        assert!(xml.contains(SOAP_ENV_NS));
        assert!(xml.contains(REQUEST_NS));
        assert!(xml.contains("req:NdsRequest2"));
    }

    #[test]
    fn response_parses_np_states() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <res:NdsResponse2 xmlns:res="http://ws.unisoft/FNSNDSCAWS2/Response" DTActFNS="05.01.2020">
      <res:NP INN="7713011336" DT="05.01.2020" STATE="3"/>
      <res:NP INN="672204588096" DT="05.01.2020" STATE="0"/>
    </res:NdsResponse2>
  </soapenv:Body>
</soapenv:Envelope>"#;
        let results = parse_response(xml).unwrap();
        assert_eq!(
            results,
            vec![
                StatusResult {
                    inn: "7713011336".into(),
                    code: 3
                },
                StatusResult {
                    inn: "672204588096".into(),
                    code: 0
                },
            ]
        );
    }

    #[test]
    fn response_fault_becomes_service_error() {
        let xml = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <soapenv:Fault>
      <faultcode>soapenv:Server</faultcode>
      <faultstring>Internal service error</faultstring>
    </soapenv:Fault>
  </soapenv:Body>
</soapenv:Envelope>"#;
        match parse_response(xml) {
            Err(RegistryError::Service(msg)) => assert_eq!(msg, "Internal service error"),
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn response_missing_state_is_parse_error() {
        let xml = r#"<NdsResponse2><NP INN="7713011336"/></NdsResponse2>"#;
        assert!(matches!(parse_response(xml), Err(RegistryError::Parse(_))));
    }

    #[test]
    fn response_non_numeric_state_is_parse_error() {
        let xml = r#"<NdsResponse2><NP INN="7713011336" STATE="abc"/></NdsResponse2>"#;
        assert!(matches!(parse_response(xml), Err(RegistryError::Parse(_))));
    }

    #[test]
    fn empty_document_yields_no_results() {
        assert!(parse_response("").unwrap().is_empty());
    }
}
