//! Station catalogue loading from the SMN KML document
//!
//! The catalogue is a geographic markup document whose placemarks carry the
//! station fields as `ExtendedData/SchemaData/SimpleData` entries. Only the
//! extended data is read here; placemark geometry is ignored.

use crate::app::models::Station;
use crate::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Load and parse every station in the catalogue document
pub fn load_stations(path: &Path) -> Result<Vec<Station>> {
    info!("Loading station catalogue: {}", path.display());
    let xml = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read catalogue {}", path.display()), e))?;
    let stations = parse_kml(&xml)?;
    info!("Loaded {} stations from catalogue", stations.len());
    Ok(stations)
}

/// Parse catalogue XML into station records
///
/// Each placemark's `SimpleData` fields become one [`Station`]. Placemarks
/// without a non-empty ESTADO field are skipped, matching the archive's own
/// convention for incomplete entries. Element matching ignores namespaces.
pub fn parse_kml(xml: &str) -> Result<Vec<Station>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stations = Vec::new();
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut in_placemark = false;
    let mut current_field: Option<String> = None;
    let mut skipped = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(element) => match element.local_name().as_ref() {
                b"Placemark" => {
                    in_placemark = true;
                    fields.clear();
                }
                b"SimpleData" if in_placemark => {
                    let name = element
                        .try_get_attribute("name")
                        .map_err(|e| Error::catalogue(format!("bad SimpleData attribute: {}", e)))?
                        .map(|attr| {
                            attr.unescape_value()
                                .map(|value| value.into_owned())
                                .map_err(Error::from)
                        })
                        .transpose()?;
                    current_field = name;
                }
                _ => {}
            },
            Event::Text(text) => {
                if let Some(name) = &current_field {
                    fields.insert(name.clone(), text.unescape()?.trim().to_string());
                }
            }
            Event::End(element) => match element.local_name().as_ref() {
                b"SimpleData" => current_field = None,
                b"Placemark" => {
                    in_placemark = false;
                    if fields.get("ESTADO").is_some_and(|estado| !estado.is_empty()) {
                        stations.push(Station::from_kml_fields(&fields));
                    } else {
                        skipped += 1;
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if skipped > 0 {
        debug!("Skipped {} placemarks without a state field", skipped);
    }

    Ok(stations)
}
