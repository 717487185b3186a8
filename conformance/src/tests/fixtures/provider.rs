//! Service providers: an OSLC 2.0 provider with one Change Management
//! service, and an OSLC 1.0 CM service descriptor.

/// URL of the first service provider.
pub const SERVICE_PROVIDER_URL: &str = "http://example.com/oslc/providers/1";

/// Creation factory URL of the Change Management service.
pub const CREATION_URL: &str = "http://example.com/oslc/providers/1/cr";

/// Query base URL of the Change Management service.
pub const QUERY_URL: &str = "http://example.com/oslc/providers/1/query";

/// Resource shape advertised by the query capability.
pub const CHANGE_REQUEST_SHAPE_URL: &str = "http://example.com/oslc/shapes/cr";

/// URL of the OSLC 1.0 service descriptor.
pub const V1_SERVICES_URL: &str = "http://example.com/v1/services";

/// Service provider with a creation factory and a query capability.
pub const SERVICE_PROVIDER_RDF_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:dcterms="http://purl.org/dc/terms/"
    xmlns:oslc="http://open-services.net/ns/core#">
  <oslc:ServiceProvider rdf:about="http://example.com/oslc/providers/1">
    <dcterms:title>Example Project</dcterms:title>
    <oslc:service>
      <oslc:Service>
        <oslc:domain rdf:resource="http://open-services.net/ns/cm#"/>
        <oslc:creationFactory>
          <oslc:CreationFactory>
            <dcterms:title>Change request factory</dcterms:title>
            <oslc:creation rdf:resource="http://example.com/oslc/providers/1/cr"/>
            <oslc:resourceType rdf:resource="http://open-services.net/ns/cm#ChangeRequest"/>
          </oslc:CreationFactory>
        </oslc:creationFactory>
        <oslc:queryCapability>
          <oslc:QueryCapability>
            <dcterms:title>Change request query</dcterms:title>
            <oslc:queryBase rdf:resource="http://example.com/oslc/providers/1/query"/>
            <oslc:resourceShape rdf:resource="http://example.com/oslc/shapes/cr"/>
            <oslc:resourceType rdf:resource="http://open-services.net/ns/cm#ChangeRequest"/>
          </oslc:QueryCapability>
        </oslc:queryCapability>
      </oslc:Service>
    </oslc:service>
    <oslc:prefixDefinition>
      <oslc:PrefixDefinition>
        <oslc:prefix>oslc_cm</oslc:prefix>
        <oslc:prefixBase rdf:resource="http://open-services.net/ns/cm#"/>
      </oslc:PrefixDefinition>
    </oslc:prefixDefinition>
  </oslc:ServiceProvider>
</rdf:RDF>
"#;

/// OSLC 1.0 CM service descriptor with a factory and a simple query.
pub const V1_SERVICE_DESCRIPTOR_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<oslc_cm:ServiceDescriptor
    xmlns:oslc_cm="http://open-services.net/xmlns/cm/1.0/"
    xmlns:dc="http://purl.org/dc/terms/"
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    rdf:about="http://example.com/v1/services">
  <dc:title>Sample Project Services</dc:title>
  <oslc_cm:changeRequests oslc_cm:version="1.0">
    <oslc_cm:factory oslc_cm:default="true">
      <dc:title>Default factory</dc:title>
      <oslc_cm:url>http://example.com/v1/cr/create</oslc_cm:url>
    </oslc_cm:factory>
    <oslc_cm:simpleQuery>
      <dc:title>Simple query</dc:title>
      <oslc_cm:url>http://example.com/v1/cr/query</oslc_cm:url>
    </oslc_cm:simpleQuery>
  </oslc_cm:changeRequests>
</oslc_cm:ServiceDescriptor>
"#;
