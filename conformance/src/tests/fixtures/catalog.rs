//! Service provider catalogs: OSLC 2.0 RDF/XML and JSON, OSLC 1.0 XML.

/// URL of the root catalog.
pub const CATALOG_URL: &str = "http://example.com/oslc/catalog";

/// URL of the catalog nested in the root catalog.
pub const NESTED_CATALOG_URL: &str = "http://example.com/oslc/catalog/nested";

/// Provider described inline in the root catalog.
pub const SECOND_PROVIDER_URL: &str = "http://example.com/oslc/providers/2";

/// Provider listed only by the nested catalog.
pub const THIRD_PROVIDER_URL: &str = "http://example.com/oslc/providers/3";

/// URL of the OSLC 1.0 catalog.
pub const V1_CATALOG_URL: &str = "http://example.com/v1/catalog";

/// Root catalog listing two providers and one nested catalog.
pub const CATALOG_RDF_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:dcterms="http://purl.org/dc/terms/"
    xmlns:oslc="http://open-services.net/ns/core#">
  <oslc:ServiceProviderCatalog rdf:about="http://example.com/oslc/catalog">
    <dcterms:title>Example Catalog</dcterms:title>
    <dcterms:publisher>
      <oslc:Publisher>
        <dcterms:title>Example Corp</dcterms:title>
        <dcterms:identifier>com.example</dcterms:identifier>
      </oslc:Publisher>
    </dcterms:publisher>
    <oslc:domain rdf:resource="http://open-services.net/ns/cm#"/>
    <oslc:serviceProvider rdf:resource="http://example.com/oslc/providers/1"/>
    <oslc:serviceProvider>
      <oslc:ServiceProvider rdf:about="http://example.com/oslc/providers/2">
        <dcterms:title>Second Project</dcterms:title>
      </oslc:ServiceProvider>
    </oslc:serviceProvider>
    <oslc:serviceProviderCatalog rdf:resource="http://example.com/oslc/catalog/nested"/>
  </oslc:ServiceProviderCatalog>
</rdf:RDF>
"#;

/// Nested catalog; links back to the root catalog.
pub const NESTED_CATALOG_RDF_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rdf:RDF
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:dcterms="http://purl.org/dc/terms/"
    xmlns:oslc="http://open-services.net/ns/core#">
  <oslc:ServiceProviderCatalog rdf:about="http://example.com/oslc/catalog/nested">
    <dcterms:title>Nested Catalog</dcterms:title>
    <oslc:serviceProvider rdf:resource="http://example.com/oslc/providers/3"/>
    <oslc:serviceProviderCatalog rdf:resource="http://example.com/oslc/catalog"/>
  </oslc:ServiceProviderCatalog>
</rdf:RDF>
"#;

/// JSON rendering of the root catalog.
pub const CATALOG_JSON: &str = r#"{
  "rdf:about": "http://example.com/oslc/catalog",
  "rdf:type": [{ "rdf:resource": "http://open-services.net/ns/core#ServiceProviderCatalog" }],
  "dcterms:title": "Example Catalog",
  "oslc:serviceProvider": [
    { "rdf:resource": "http://example.com/oslc/providers/1" },
    { "rdf:about": "http://example.com/oslc/providers/2", "dcterms:title": "Second Project" }
  ]
}
"#;

/// OSLC 1.0 catalog with one provider entry and one nested catalog entry.
pub const V1_CATALOG_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<oslc_disc:ServiceProviderCatalog
    xmlns:oslc_disc="http://open-services.net/xmlns/discovery/1.0/"
    xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns:dc="http://purl.org/dc/terms/"
    rdf:about="http://example.com/v1/catalog">
  <dc:title>Sample OSLC 1.0 Catalog</dc:title>
  <oslc_disc:entry>
    <oslc_disc:ServiceProvider>
      <dc:title>Sample Project</dc:title>
      <oslc_disc:services rdf:resource="http://example.com/v1/services"/>
    </oslc_disc:ServiceProvider>
  </oslc_disc:entry>
  <oslc_disc:entry>
    <oslc_disc:ServiceProviderCatalog rdf:about="http://example.com/v1/catalog">
      <dc:title>Sample OSLC 1.0 Catalog</dc:title>
    </oslc_disc:ServiceProviderCatalog>
  </oslc_disc:entry>
</oslc_disc:ServiceProviderCatalog>
"#;
