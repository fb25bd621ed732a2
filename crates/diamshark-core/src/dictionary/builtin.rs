use super::DataType::{self, *};
use super::VENDOR_3GPP;

type Entry = (u32, &'static str, u32, DataType);

pub(super) const TABLES: &[(u32, &[Entry])] = &[
    (0, BASE),
    (4, CREDIT_CONTROL),
    (16777251, S6A),
];

/// RFC 6733 base protocol, plus the RADIUS-derived AVPs it reuses.
const BASE: &[Entry] = &[
    (1, "User-Name", 0, Utf8String),
    (25, "Class", 0, OctetString),
    (27, "Session-Timeout", 0, Unsigned32),
    (33, "Proxy-State", 0, OctetString),
    (44, "Accounting-Session-Id", 0, OctetString),
    (50, "Acct-Multi-Session-Id", 0, Utf8String),
    (55, "Event-Timestamp", 0, Time),
    (85, "Acct-Interim-Interval", 0, Unsigned32),
    (257, "Host-IP-Address", 0, Address),
    (258, "Auth-Application-Id", 0, Unsigned32),
    (259, "Acct-Application-Id", 0, Unsigned32),
    (260, "Vendor-Specific-Application-Id", 0, Grouped),
    (261, "Redirect-Host-Usage", 0, Enumerated),
    (262, "Redirect-Max-Cache-Time", 0, Unsigned32),
    (263, "Session-Id", 0, Utf8String),
    (264, "Origin-Host", 0, DiameterIdentity),
    (265, "Supported-Vendor-Id", 0, Unsigned32),
    (266, "Vendor-Id", 0, Unsigned32),
    (267, "Firmware-Revision", 0, Unsigned32),
    (268, "Result-Code", 0, Unsigned32),
    (269, "Product-Name", 0, Utf8String),
    (270, "Session-Binding", 0, Unsigned32),
    (271, "Session-Server-Failover", 0, Enumerated),
    (272, "Multi-Round-Time-Out", 0, Unsigned32),
    (273, "Disconnect-Cause", 0, Enumerated),
    (274, "Auth-Request-Type", 0, Enumerated),
    (276, "Auth-Grace-Period", 0, Unsigned32),
    (277, "Auth-Session-State", 0, Enumerated),
    (278, "Origin-State-Id", 0, Unsigned32),
    (279, "Failed-AVP", 0, Grouped),
    (280, "Proxy-Host", 0, DiameterIdentity),
    (281, "Error-Message", 0, Utf8String),
    (282, "Route-Record", 0, DiameterIdentity),
    (283, "Destination-Realm", 0, DiameterIdentity),
    (284, "Proxy-Info", 0, Grouped),
    (285, "Re-Auth-Request-Type", 0, Enumerated),
    (287, "Accounting-Sub-Session-Id", 0, Unsigned64),
    (291, "Authorization-Lifetime", 0, Unsigned32),
    (292, "Redirect-Host", 0, DiameterUri),
    (293, "Destination-Host", 0, DiameterIdentity),
    (294, "Error-Reporting-Host", 0, DiameterIdentity),
    (295, "Termination-Cause", 0, Enumerated),
    (296, "Origin-Realm", 0, DiameterIdentity),
    (297, "Experimental-Result", 0, Grouped),
    (298, "Experimental-Result-Code", 0, Unsigned32),
    (299, "Inband-Security-Id", 0, Unsigned32),
    (480, "Accounting-Record-Type", 0, Enumerated),
    (483, "Accounting-Realtime-Required", 0, Enumerated),
    (485, "Accounting-Record-Number", 0, Unsigned32),
];

/// RFC 4006 Diameter Credit-Control application.
const CREDIT_CONTROL: &[Entry] = &[
    (411, "CC-Correlation-Id", 0, OctetString),
    (412, "CC-Input-Octets", 0, Unsigned64),
    (413, "CC-Money", 0, Grouped),
    (414, "CC-Output-Octets", 0, Unsigned64),
    (415, "CC-Request-Number", 0, Unsigned32),
    (416, "CC-Request-Type", 0, Enumerated),
    (417, "CC-Service-Specific-Units", 0, Unsigned64),
    (418, "CC-Session-Failover", 0, Enumerated),
    (420, "CC-Time", 0, Unsigned32),
    (421, "CC-Total-Octets", 0, Unsigned64),
    (427, "Credit-Control-Failure-Handling", 0, Enumerated),
    (429, "Currency-Code", 0, Unsigned32),
    (431, "Granted-Service-Unit", 0, Grouped),
    (432, "Rating-Group", 0, Unsigned32),
    (437, "Requested-Service-Unit", 0, Grouped),
    (439, "Service-Identifier", 0, Unsigned32),
    (443, "Subscription-Id", 0, Grouped),
    (444, "Subscription-Id-Data", 0, Utf8String),
    (445, "Unit-Value", 0, Grouped),
    (446, "Used-Service-Unit", 0, Grouped),
    (447, "Value-Digits", 0, Integer64),
    (448, "Validity-Time", 0, Unsigned32),
    (450, "Subscription-Id-Type", 0, Enumerated),
    (455, "Multiple-Services-Indicator", 0, Enumerated),
    (456, "Multiple-Services-Credit-Control", 0, Grouped),
    (458, "User-Equipment-Info", 0, Grouped),
    (459, "User-Equipment-Info-Type", 0, Enumerated),
    (460, "User-Equipment-Info-Value", 0, OctetString),
    (461, "Service-Context-Id", 0, Utf8String),
];

/// 3GPP TS 29.272 S6a/S6d interface between MME/SGSN and HSS.
const S6A: &[Entry] = &[
    (334, "MIP-Home-Agent-Address", 0, Address),
    (486, "MIP6-Agent-Info", 0, Grouped),
    (493, "Service-Selection", 0, Utf8String),
    (515, "Max-Requested-Bandwidth-DL", VENDOR_3GPP, Unsigned32),
    (516, "Max-Requested-Bandwidth-UL", VENDOR_3GPP, Unsigned32),
    (628, "Supported-Features", VENDOR_3GPP, Grouped),
    (629, "Feature-List-ID", VENDOR_3GPP, Unsigned32),
    (630, "Feature-List", VENDOR_3GPP, Unsigned32),
    (848, "Served-Party-IP-Address", VENDOR_3GPP, Address),
    (1028, "QoS-Class-Identifier", VENDOR_3GPP, Enumerated),
    (1032, "RAT-Type", VENDOR_3GPP, Enumerated),
    (1034, "Allocation-Retention-Priority", VENDOR_3GPP, Grouped),
    (1046, "Priority-Level", VENDOR_3GPP, Unsigned32),
    (1047, "Pre-emption-Capability", VENDOR_3GPP, Enumerated),
    (1048, "Pre-emption-Vulnerability", VENDOR_3GPP, Enumerated),
    (1400, "Subscription-Data", VENDOR_3GPP, Grouped),
    (1401, "Terminal-Information", VENDOR_3GPP, Grouped),
    (1402, "IMEI", VENDOR_3GPP, Utf8String),
    (1403, "Software-Version", VENDOR_3GPP, Utf8String),
    (1405, "ULR-Flags", VENDOR_3GPP, Unsigned32),
    (1406, "ULA-Flags", VENDOR_3GPP, Unsigned32),
    (1407, "Visited-PLMN-Id", VENDOR_3GPP, OctetString),
    (1408, "Requested-EUTRAN-Authentication-Info", VENDOR_3GPP, Grouped),
    (1409, "Requested-UTRAN-GERAN-Authentication-Info", VENDOR_3GPP, Grouped),
    (1410, "Number-Of-Requested-Vectors", VENDOR_3GPP, Unsigned32),
    (1411, "Re-Synchronization-Info", VENDOR_3GPP, OctetString),
    (1412, "Immediate-Response-Preferred", VENDOR_3GPP, Unsigned32),
    (1413, "Authentication-Info", VENDOR_3GPP, Grouped),
    (1414, "E-UTRAN-Vector", VENDOR_3GPP, Grouped),
    (1415, "UTRAN-Vector", VENDOR_3GPP, Grouped),
    (1416, "GERAN-Vector", VENDOR_3GPP, Grouped),
    (1417, "Network-Access-Mode", VENDOR_3GPP, Enumerated),
    (1418, "HPLMN-ODB", VENDOR_3GPP, Unsigned32),
    (1419, "Item-Number", VENDOR_3GPP, Unsigned32),
    (1420, "Cancellation-Type", VENDOR_3GPP, Enumerated),
    (1421, "DSR-Flags", VENDOR_3GPP, Unsigned32),
    (1422, "DSA-Flags", VENDOR_3GPP, Unsigned32),
    (1423, "Context-Identifier", VENDOR_3GPP, Unsigned32),
    (1424, "Subscriber-Status", VENDOR_3GPP, Enumerated),
    (1425, "Operator-Determined-Barring", VENDOR_3GPP, Unsigned32),
    (1426, "Access-Restriction-Data", VENDOR_3GPP, Unsigned32),
    (1427, "APN-OI-Replacement", VENDOR_3GPP, Utf8String),
    (1428, "All-APN-Configurations-Included-Indicator", VENDOR_3GPP, Enumerated),
    (1429, "APN-Configuration-Profile", VENDOR_3GPP, Grouped),
    (1430, "APN-Configuration", VENDOR_3GPP, Grouped),
    (1431, "EPS-Subscribed-QoS-Profile", VENDOR_3GPP, Grouped),
    (1432, "VPLMN-Dynamic-Address-Allowed", VENDOR_3GPP, Enumerated),
    (1433, "STN-SR", VENDOR_3GPP, OctetString),
    (1434, "Alert-Reason", VENDOR_3GPP, Enumerated),
    (1435, "AMBR", VENDOR_3GPP, Grouped),
    (1438, "PDN-GW-Allocation-Type", VENDOR_3GPP, Enumerated),
    (1439, "Expiration-Date", VENDOR_3GPP, Time),
    (1441, "IDA-Flags", VENDOR_3GPP, Unsigned32),
    (1442, "PUA-Flags", VENDOR_3GPP, Unsigned32),
    (1443, "NOR-Flags", VENDOR_3GPP, Unsigned32),
    (1445, "Equivalent-PLMN-List", VENDOR_3GPP, Grouped),
    (1447, "RAND", VENDOR_3GPP, OctetString),
    (1448, "XRES", VENDOR_3GPP, OctetString),
    (1449, "AUTN", VENDOR_3GPP, OctetString),
    (1450, "KASME", VENDOR_3GPP, OctetString),
    (1456, "PDN-Type", VENDOR_3GPP, Enumerated),
    (1490, "IDR-Flags", VENDOR_3GPP, Unsigned32),
    (1615, "UE-SRVCC-Capability", VENDOR_3GPP, Enumerated),
];
