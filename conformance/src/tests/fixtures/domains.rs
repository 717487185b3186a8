//! Sample domain resources and a query result page.

/// URL of the sample change request.
pub const CHANGE_REQUEST_URL: &str = "http://example.com/oslc/cr/1";

/// URL of the sample asset.
pub const ASSET_URL: &str = "http://example.com/oslc/assets/1";

/// URL of the sample automation plan.
pub const AUTOMATION_PLAN_URL: &str = "http://example.com/oslc/auto/plans/1";

/// URL of the sample automation result.
pub const AUTOMATION_RESULT_URL: &str = "http://example.com/oslc/auto/results/1";

/// URL of the sample requirement.
pub const REQUIREMENT_URL: &str = "http://example.com/oslc/rm/requirements/1";

/// URL of the sample performance monitoring record.
pub const PM_RECORD_URL: &str = "http://example.com/oslc/pm/records/1";

/// A conforming change request.
pub const CHANGE_REQUEST_RDF_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:dcterms="http://purl.org/dc/terms/"
    xmlns:oslc="http://open-services.net/ns/core#"
    xmlns:oslc_cm="http://open-services.net/ns/cm#">
  <oslc_cm:ChangeRequest rdf:about="http://example.com/oslc/cr/1">
    <dcterms:title>Crash on startup</dcterms:title>
    <dcterms:identifier>1</dcterms:identifier>
    <dcterms:created rdf:datatype="http://www.w3.org/2001/XMLSchema#dateTime">2024-03-01T10:00:00Z</dcterms:created>
    <dcterms:creator rdf:resource="http://example.com/users/alice"/>
    <oslc_cm:status>Open</oslc_cm:status>
    <oslc_cm:closed rdf:datatype="http://www.w3.org/2001/XMLSchema#boolean">false</oslc_cm:closed>
    <oslc:serviceProvider rdf:resource="http://example.com/oslc/providers/1"/>
  </oslc_cm:ChangeRequest>
</rdf:RDF>
"#;

/// Plain XML rendering of a change request that lacks `dcterms:identifier`.
pub const CHANGE_REQUEST_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<oslc_cm:ChangeRequest
    xmlns:oslc_cm="http://open-services.net/ns/cm#"
    xmlns:dcterms="http://purl.org/dc/terms/">
  <dcterms:title>Crash on startup</dcterms:title>
  <oslc_cm:status>Open</oslc_cm:status>
</oslc_cm:ChangeRequest>
"#;

/// Query result page with one member, described inline.
pub const QUERY_RESULTS_RDF_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:rdfs="http://www.w3.org/2000/01/rdf-schema#"
    xmlns:dcterms="http://purl.org/dc/terms/"
    xmlns:oslc="http://open-services.net/ns/core#"
    xmlns:oslc_cm="http://open-services.net/ns/cm#">
  <rdf:Description rdf:about="http://example.com/oslc/providers/1/query">
    <rdfs:member rdf:resource="http://example.com/oslc/cr/1"/>
  </rdf:Description>
  <oslc_cm:ChangeRequest rdf:about="http://example.com/oslc/cr/1">
    <dcterms:title>Crash on startup</dcterms:title>
    <dcterms:identifier>1</dcterms:identifier>
    <oslc_cm:status>Open</oslc_cm:status>
  </oslc_cm:ChangeRequest>
  <oslc:ResponseInfo rdf:about="http://example.com/oslc/providers/1/query?oslc.paging=true">
    <dcterms:title>Change requests</dcterms:title>
    <oslc:totalCount rdf:datatype="http://www.w3.org/2001/XMLSchema#integer">1</oslc:totalCount>
  </oslc:ResponseInfo>
</rdf:RDF>
"#;

/// An asset with one inline artifact and an artifact factory.
pub const ASSET_RDF_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:dcterms="http://purl.org/dc/terms/"
    xmlns:oslc_asset="http://open-services.net/ns/asset#">
  <oslc_asset:Asset rdf:about="http://example.com/oslc/assets/1">
    <dcterms:title>Build toolchain</dcterms:title>
    <dcterms:identifier>A-1</dcterms:identifier>
    <oslc_asset:version>1.2.0</oslc_asset:version>
    <oslc_asset:artifact>
      <oslc_asset:Artifact>
        <dcterms:title>toolchain.zip</dcterms:title>
        <oslc_asset:size rdf:datatype="http://www.w3.org/2001/XMLSchema#integer">2048</oslc_asset:size>
        <oslc_asset:content rdf:resource="http://example.com/oslc/assets/1/artifacts/1"/>
      </oslc_asset:Artifact>
    </oslc_asset:artifact>
    <oslc_asset:artifactFactory rdf:resource="http://example.com/oslc/assets/1/artifacts"/>
  </oslc_asset:Asset>
</rdf:RDF>
"#;

/// An automation plan.
pub const AUTOMATION_PLAN_RDF_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:dcterms="http://purl.org/dc/terms/"
    xmlns:oslc_auto="http://open-services.net/ns/auto#">
  <oslc_auto:AutomationPlan rdf:about="http://example.com/oslc/auto/plans/1">
    <dcterms:title>Nightly build</dcterms:title>
    <dcterms:identifier>plan-1</dcterms:identifier>
    <dcterms:created rdf:datatype="http://www.w3.org/2001/XMLSchema#dateTime">2024-03-01T02:00:00Z</dcterms:created>
  </oslc_auto:AutomationPlan>
</rdf:RDF>
"#;

/// An automation result reporting on the sample plan.
pub const AUTOMATION_RESULT_RDF_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:dcterms="http://purl.org/dc/terms/"
    xmlns:oslc="http://open-services.net/ns/core#"
    xmlns:oslc_auto="http://open-services.net/ns/auto#">
  <oslc_auto:AutomationResult rdf:about="http://example.com/oslc/auto/results/1">
    <dcterms:title>Nightly build #12</dcterms:title>
    <dcterms:identifier>result-12</dcterms:identifier>
    <oslc_auto:state rdf:resource="http://open-services.net/ns/auto#complete"/>
    <oslc_auto:verdict rdf:resource="http://open-services.net/ns/auto#passed"/>
    <oslc_auto:reportsOnAutomationPlan rdf:resource="http://example.com/oslc/auto/plans/1"/>
    <oslc_auto:outputParameter>
      <oslc_auto:ParameterInstance>
        <oslc:name>buildLabel</oslc:name>
        <rdf:value>20240301-0200</rdf:value>
      </oslc_auto:ParameterInstance>
    </oslc_auto:outputParameter>
  </oslc_auto:AutomationResult>
</rdf:RDF>
"#;

/// A requirement validated by a test case.
pub const REQUIREMENT_RDF_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:dcterms="http://purl.org/dc/terms/"
    xmlns:oslc_rm="http://open-services.net/ns/rm#">
  <oslc_rm:Requirement rdf:about="http://example.com/oslc/rm/requirements/1">
    <dcterms:title>Start within two seconds</dcterms:title>
    <dcterms:identifier>REQ-1</dcterms:identifier>
    <oslc_rm:validatedBy rdf:resource="http://example.com/qm/testcases/7"/>
  </oslc_rm:Requirement>
</rdf:RDF>
"#;

/// A performance monitoring record observing one measure.
pub const PM_RECORD_RDF_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:dcterms="http://purl.org/dc/terms/"
    xmlns:ems="http://open-services.net/ns/ems#"
    xmlns:pm="http://open-services.net/ns/perfmon#">
  <pm:PerformanceMonitoringRecord rdf:about="http://example.com/oslc/pm/records/1">
    <dcterms:isPartOf rdf:resource="http://example.com/hosts/web-1"/>
    <dcterms:modified rdf:datatype="http://www.w3.org/2001/XMLSchema#dateTime">2024-03-01T10:05:00Z</dcterms:modified>
    <ems:observes>
      <ems:Measure>
        <ems:metric rdf:resource="http://open-services.net/ns/perfmon#CpuUsed"/>
        <ems:numericValue>42</ems:numericValue>
      </ems:Measure>
    </ems:observes>
  </pm:PerformanceMonitoringRecord>
</rdf:RDF>
"#;
