//! A tracked resource set with its base and a two-event change log.

/// URL of the tracked resource set.
pub const TRS_URL: &str = "http://example.com/trs";

/// URL of the base resource enumeration.
pub const TRS_BASE_URL: &str = "http://example.com/trs/base";

/// Tracked resource set with an inline change log, newest event first.
pub const TRS_RDF_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:trs="http://open-services.net/ns/core/trs#">
  <trs:TrackedResourceSet rdf:about="http://example.com/trs">
    <trs:base rdf:resource="http://example.com/trs/base"/>
    <trs:changeLog>
      <trs:ChangeLog>
        <trs:change rdf:resource="urn:urn-3:example.com:2024-03-01:2"/>
        <trs:change rdf:resource="urn:urn-3:example.com:2024-03-01:1"/>
      </trs:ChangeLog>
    </trs:changeLog>
  </trs:TrackedResourceSet>
  <trs:Modification rdf:about="urn:urn-3:example.com:2024-03-01:2">
    <trs:changed rdf:resource="http://example.com/oslc/cr/1"/>
    <trs:order rdf:datatype="http://www.w3.org/2001/XMLSchema#integer">2</trs:order>
  </trs:Modification>
  <trs:Creation rdf:about="urn:urn-3:example.com:2024-03-01:1">
    <trs:changed rdf:resource="http://example.com/oslc/cr/1"/>
    <trs:order rdf:datatype="http://www.w3.org/2001/XMLSchema#integer">1</trs:order>
  </trs:Creation>
</rdf:RDF>
"#;

/// Base enumeration with one member and a cutoff event.
pub const TRS_BASE_RDF_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
    xmlns:ldp="http://www.w3.org/ns/ldp#"
    xmlns:trs="http://open-services.net/ns/core/trs#">
  <ldp:DirectContainer rdf:about="http://example.com/trs/base">
    <trs:cutoffEvent rdf:resource="urn:urn-3:example.com:2024-03-01:2"/>
    <rdfs:member rdf:resource="http://example.com/oslc/cr/1"/>
  </ldp:DirectContainer>
</rdf:RDF>
"#;
