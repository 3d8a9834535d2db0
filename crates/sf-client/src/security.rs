//! Security utilities for Salesforce API operations.
//!
//! ## SOQL Injection Prevention
//!
//! Values interpolated into SOQL string literals MUST be escaped. The
//! username in the verification query and the job id in the shift query
//! both go through [`soql::escape_string`].
//!
//! ```rust
//! use volprobe_sf_client::security::soql;
//!
//! let name = soql::escape_string("o'brien@example.org");
//! let query = format!("SELECT Id FROM User WHERE Username = '{}'", name);
//! assert!(query.contains("o\\'brien"));
//! ```
//!
//! ## SOAP payloads
//!
//! Credentials embedded in the SOAP login envelope are XML-escaped with
//! [`xml::escape`].

/// SOQL escaping utilities for injection prevention.
pub mod soql {
    /// Escape a string value for use in SOQL queries.
    ///
    /// Escapes single quotes, backslashes, newlines, carriage returns and tabs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use volprobe_sf_client::security::soql;
    ///
    /// let safe = soql::escape_string("O'Brien & Co.");
    /// assert_eq!(safe, "O\\'Brien & Co.");
    /// ```
    #[must_use]
    pub fn escape_string(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 16);
        for ch in value.chars() {
            match ch {
                '\'' => escaped.push_str("\\'"),
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    /// Validate that a field name contains only safe characters.
    ///
    /// Names must start with a letter and contain only ASCII alphanumerics and
    /// underscores, which covers namespaced custom fields such as
    /// `GW_Volunteers__Start_Date_Time__c`.
    ///
    /// ```rust
    /// use volprobe_sf_client::security::soql;
    ///
    /// assert!(soql::is_safe_field_name("GW_Volunteers__Duration__c"));
    /// assert!(!soql::is_safe_field_name("Bad'; DROP TABLE--"));
    /// ```
    #[must_use]
    pub fn is_safe_field_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {}
            _ => return false,
        }
        chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    }

    /// Validate that a SObject name is safe.
    ///
    /// SObject names follow the same rules as field names.
    #[must_use]
    pub fn is_safe_sobject_name(name: &str) -> bool {
        is_safe_field_name(name)
    }
}

/// Salesforce identifier checks.
pub mod url {
    /// Validate that a Salesforce ID has the correct format.
    ///
    /// Salesforce IDs are either 15 or 18 characters and contain only
    /// alphanumeric characters.
    ///
    /// ```rust
    /// use volprobe_sf_client::security::url;
    ///
    /// assert!(url::is_valid_salesforce_id("a0B5g000001XyZ1"));
    /// assert!(!url::is_valid_salesforce_id("a0B' OR Id != '"));
    /// ```
    #[must_use]
    pub fn is_valid_salesforce_id(id: &str) -> bool {
        let len = id.len();
        (len == 15 || len == 18) && id.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

/// XML escaping utilities for SOAP calls.
pub mod xml {
    /// Escape a string for safe inclusion in XML content.
    ///
    /// This escapes the five predefined XML entities.
    ///
    /// ```rust
    /// use volprobe_sf_client::security::xml;
    ///
    /// let safe = xml::escape("p<ss>&'word\"");
    /// assert_eq!(safe, "p&lt;ss&gt;&amp;&apos;word&quot;");
    /// ```
    #[must_use]
    pub fn escape(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 16);
        for ch in value.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    /// Reverse [`escape`] for text pulled out of a SOAP response.
    #[must_use]
    pub fn unescape(value: &str) -> String {
        value
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&amp;", "&")
    }
}
