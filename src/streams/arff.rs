use crate::core::attributes::{AttributeRef, NominalAttribute};
use crate::core::error::{BayesError, Result};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{Example, Instances};
use crate::utils::file_parsing::{split_fields, split_keyword, strip_comment, take_name};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
struct DataRow {
    line: usize,
    fields: Vec<String>,
}

/// A parsed ARFF relation with nominal attributes only.
///
/// The class is the attribute named `class` (any case) or, when none is, the
/// last declared attribute. Its column keeps its declared position in the
/// data rows.
#[derive(Debug, Clone)]
pub struct ArffDocument {
    header: Arc<InstanceHeader>,
    class_position: usize,
    rows: Vec<DataRow>,
}

impl ArffDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<ArffDocument> {
        let text = fs::read_to_string(path.as_ref())?;
        let doc = Self::parse(&text)?;
        debug!(
            path = %path.as_ref().display(),
            relation = doc.header.relation_name(),
            rows = doc.number_of_rows(),
            "read ARFF file"
        );
        Ok(doc)
    }

    pub fn parse(text: &str) -> Result<ArffDocument> {
        let mut relation_name = String::new();
        let mut declared: Vec<(String, Vec<String>)> = Vec::new();
        let mut rows = Vec::new();
        let mut in_data = false;
        let mut last_line = 0;

        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            last_line = line_no;
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }

            if in_data {
                let fields = split_fields(line, ',');
                if fields.len() != declared.len() {
                    return Err(BayesError::parse(
                        line_no,
                        format!(
                            "expected {} values, found {}",
                            declared.len(),
                            fields.len()
                        ),
                    ));
                }
                if fields.iter().any(|f| f == "?") {
                    return Err(BayesError::parse(line_no, "missing values are not supported"));
                }
                rows.push(DataRow {
                    line: line_no,
                    fields,
                });
                continue;
            }

            let (keyword, rest) = split_keyword(line);
            if keyword.eq_ignore_ascii_case("@relation") {
                relation_name = take_name(rest)
                    .map(|(name, _)| name.to_string())
                    .unwrap_or_default();
            } else if keyword.eq_ignore_ascii_case("@attribute") {
                declared.push(parse_attribute(line_no, rest)?);
            } else if keyword.eq_ignore_ascii_case("@data") {
                in_data = true;
            } else {
                return Err(BayesError::parse(
                    line_no,
                    format!("unexpected '{keyword}' before @data"),
                ));
            }
        }

        if !in_data {
            return Err(BayesError::parse(last_line, "missing @data section"));
        }
        if declared.is_empty() {
            return Err(BayesError::parse(last_line, "no attributes declared"));
        }

        let class_position = declared
            .iter()
            .position(|(name, _)| name.eq_ignore_ascii_case("class"))
            .unwrap_or(declared.len() - 1);

        let class_index = declared.len() - 1;
        let mut attributes: Vec<AttributeRef> = Vec::with_capacity(class_index);
        let mut class_attribute = None;
        for (position, (name, values)) in declared.into_iter().enumerate() {
            if position == class_position {
                class_attribute = Some(Arc::new(NominalAttribute::new(name, class_index, values)?));
            } else {
                let index = attributes.len();
                attributes.push(Arc::new(NominalAttribute::new(name, index, values)?));
            }
        }
        let class_attribute = class_attribute
            .ok_or_else(|| BayesError::parse(last_line, "no class attribute"))?;

        Ok(ArffDocument {
            header: Arc::new(InstanceHeader::new(
                relation_name,
                attributes,
                class_attribute,
            )),
            class_position,
            rows,
        })
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn number_of_rows(&self) -> usize {
        self.rows.len()
    }

    /// Rows resolved against this document's own header.
    pub fn to_instances(&self) -> Result<Instances> {
        self.resolve(&self.header)
    }

    /// Rows resolved against another catalog, typically the training one.
    /// The declared attributes must match it exactly.
    pub fn instances_for(&self, header: &Arc<InstanceHeader>) -> Result<Instances> {
        header.ensure_compatible(&self.header)?;
        self.resolve(header)
    }

    fn resolve(&self, header: &Arc<InstanceHeader>) -> Result<Instances> {
        let mut instances = Instances::new(Arc::clone(header));
        for row in &self.rows {
            instances.push(self.resolve_row(header, row)?)?;
        }
        Ok(instances)
    }

    fn resolve_row(&self, header: &InstanceHeader, row: &DataRow) -> Result<Example> {
        let mut values = Vec::with_capacity(header.number_of_attributes());
        let mut class_label = None;
        for (position, field) in row.fields.iter().enumerate() {
            if position == self.class_position {
                class_label = Some(field.as_str());
            } else {
                values.push(field.as_str());
            }
        }
        let class_label = class_label
            .ok_or_else(|| BayesError::parse(row.line, "row has no class value"))?;
        header.example_from_labels(&values, class_label)
    }
}

fn parse_attribute(line_no: usize, rest: &str) -> Result<(String, Vec<String>)> {
    let (name, domain) = take_name(rest)
        .ok_or_else(|| BayesError::parse(line_no, "attribute without a name"))?;
    let inner = domain
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(|| {
            BayesError::parse(
                line_no,
                format!(
                    "attribute '{name}' is not nominal; only {{v1, v2, ...}} domains are supported"
                ),
            )
        })?;
    let values: Vec<String> = split_fields(inner, ',')
        .into_iter()
        .filter(|v| !v.is_empty())
        .collect();
    if values.is_empty() {
        return Err(BayesError::parse(
            line_no,
            format!("attribute '{name}' declares no values"),
        ));
    }
    Ok((name.to_string(), values))
}

/// Reads a training file.
pub fn load_instances<P: AsRef<Path>>(path: P) -> Result<Instances> {
    ArffDocument::open(path)?.to_instances()
}

/// Reads a test file against the training catalog.
pub fn load_instances_for<P: AsRef<Path>>(
    path: P,
    header: &Arc<InstanceHeader>,
) -> Result<Instances> {
    ArffDocument::open(path)?.instances_for(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const WEATHER: &str = "\
% the play-tennis relation
@relation weather

@attribute outlook {sunny, overcast, rainy}
@attribute 'wind speed' {calm, 'very windy'}
@ATTRIBUTE class {yes,no}

@data
sunny, calm, no
overcast,'very windy',yes % inline comment
rainy,calm,yes
";

    #[test]
    fn parses_header_and_rows() {
        let doc = ArffDocument::parse(WEATHER).unwrap();
        let h = doc.header();
        assert_eq!(h.relation_name(), "weather");
        assert_eq!(h.number_of_attributes(), 2);
        assert_eq!(h.attributes()[1].name(), "wind speed");
        assert_eq!(h.attributes()[1].values(), &["calm", "very windy"]);
        assert_eq!(h.class_attribute().name(), "class");
        assert_eq!(h.class_attribute().index(), 2);

        assert_eq!(doc.number_of_rows(), 3);
        let data = doc.to_instances().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.get(1).unwrap().values(), &[1, 1]);
        assert_eq!(data.get(1).unwrap().class_value(), 0);
    }

    #[test]
    fn class_column_may_come_first() {
        let text = "@relation r\n@attribute class {p,q}\n@attribute x {a,b}\n@data\nq,a\n";
        let doc = ArffDocument::parse(text).unwrap();
        let data = doc.to_instances().unwrap();
        assert_eq!(doc.header().attributes()[0].name(), "x");
        assert_eq!(data.get(0).unwrap().values(), &[0]);
        assert_eq!(data.get(0).unwrap().class_value(), 1);
    }

    #[test]
    fn last_attribute_is_the_class_when_none_is_named_so() {
        let text = "@relation r\n@attribute x {a,b}\n@attribute label {p,q}\n@data\nb,p\n";
        let doc = ArffDocument::parse(text).unwrap();
        assert_eq!(doc.header().class_attribute().name(), "label");
        assert_eq!(doc.to_instances().unwrap().get(0).unwrap().values(), &[1]);
    }

    #[test]
    fn rejects_numeric_attributes_and_short_rows() {
        let numeric = "@relation r\n@attribute x numeric\n@attribute class {a}\n@data\n";
        assert!(matches!(
            ArffDocument::parse(numeric),
            Err(BayesError::Parse { line: 2, .. })
        ));

        let short = "@relation r\n@attribute x {a}\n@attribute class {a}\n@data\na\n";
        assert!(matches!(
            ArffDocument::parse(short),
            Err(BayesError::Parse { line: 5, .. })
        ));

        let missing = "@relation r\n@attribute x {a}\n@attribute class {a}\n@data\n?,a\n";
        assert!(matches!(
            ArffDocument::parse(missing),
            Err(BayesError::Parse { line: 5, .. })
        ));

        let no_data = "@relation r\n@attribute class {a}\n";
        assert!(ArffDocument::parse(no_data).is_err());
    }

    #[test]
    fn unknown_value_in_a_row_is_a_lookup_error() {
        let text = "@relation r\n@attribute x {a,b}\n@attribute class {p,q}\n@data\nc,p\n";
        let doc = ArffDocument::parse(text).unwrap();
        assert!(matches!(
            doc.to_instances(),
            Err(BayesError::UnknownValue { .. })
        ));
    }

    #[test]
    fn test_file_must_match_the_training_catalog() {
        let train = ArffDocument::parse(WEATHER).unwrap();
        let test = ArffDocument::parse(WEATHER).unwrap();
        let data = test.instances_for(train.header()).unwrap();
        assert_eq!(data.len(), 3);
        assert!(Arc::ptr_eq(&data.shared_header(), train.header()));

        let other = "@relation weather\n\
            @attribute outlook {sunny, rainy}\n\
            @attribute 'wind speed' {calm, 'very windy'}\n\
            @attribute class {yes,no}\n@data\n";
        let other = ArffDocument::parse(other).unwrap();
        assert!(matches!(
            other.instances_for(train.header()),
            Err(BayesError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn loads_from_disk() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(WEATHER.as_bytes()).unwrap();
        let data = load_instances(f.path()).unwrap();
        assert_eq!(data.len(), 3);

        let again = load_instances_for(f.path(), &data.shared_header()).unwrap();
        assert_eq!(again.len(), 3);

        assert!(matches!(
            load_instances("/definitely/not/here.arff"),
            Err(BayesError::Io(_))
        ));
    }
}
