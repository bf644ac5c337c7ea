// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

// This file was autogenerated from NodeIds.csv by tools/schema/gen_node_ids.js
// DO NOT EDIT THIS FILE

use std::convert::TryFrom;

use crate::node_id::NodeId;

/// Emits an enum of well known namespace zero node ids along with conversions to and from
/// the raw numeric value and a name table used by the symbolic registry.
macro_rules! node_id_enum {
    ($enum_name:ident, $table_name:ident, [ $( $name:ident = $value:literal ),+ $(,)? ]) => {
        #[allow(non_camel_case_types)]
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
        pub enum $enum_name {
            $( $name = $value, )+
        }

        impl TryFrom<u32> for $enum_name {
            type Error = ();

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                match value {
                    $( $value => Ok($enum_name::$name), )+
                    _ => Err(()),
                }
            }
        }

        impl From<$enum_name> for NodeId {
            fn from(value: $enum_name) -> Self {
                NodeId::new(0, value as u32)
            }
        }

        pub(crate) const $table_name: &[(&str, u32)] = &[
            $( (stringify!($name), $value), )+
        ];
    };
}

node_id_enum![
    DataTypeId,
    DATA_TYPE_NAMES,
    [
        Boolean = 1,
        SByte = 2,
        Byte = 3,
        Int16 = 4,
        UInt16 = 5,
        Int32 = 6,
        UInt32 = 7,
        Int64 = 8,
        UInt64 = 9,
        Float = 10,
        Double = 11,
        String = 12,
        DateTime = 13,
        Guid = 14,
        ByteString = 15,
        XmlElement = 16,
        NodeId = 17,
        ExpandedNodeId = 18,
        StatusCode = 19,
        QualifiedName = 20,
        LocalizedText = 21,
        Structure = 22,
        DataValue = 23,
        BaseDataType = 24,
        DiagnosticInfo = 25,
        Number = 26,
        Integer = 27,
        UInteger = 28,
        Enumeration = 29,
        Image = 30,
        Decimal = 50,
        IdType = 256,
        NodeClass = 257,
        IntegerId = 288,
        Duration = 290,
        NumericRange = 291,
        UtcTime = 294,
        LocaleId = 295,
        Argument = 296,
        ApplicationType = 307,
        BuildInfo = 338,
        ServerState = 852,
        ServerStatusDataType = 862,
        Range = 884,
        EUInformation = 887,
        ImageBMP = 2000,
        ImageGIF = 2001,
        ImageJPG = 2002,
        ImagePNG = 2003,
        EnumValueType = 7594,
        TimeZoneDataType = 8912,
    ]
];

node_id_enum![
    ReferenceTypeId,
    REFERENCE_TYPE_NAMES,
    [
        References = 31,
        NonHierarchicalReferences = 32,
        HierarchicalReferences = 33,
        HasChild = 34,
        Organizes = 35,
        HasEventSource = 36,
        HasModellingRule = 37,
        HasEncoding = 38,
        HasDescription = 39,
        HasTypeDefinition = 40,
        GeneratesEvent = 41,
        Aggregates = 44,
        HasSubtype = 45,
        HasProperty = 46,
        HasComponent = 47,
        HasNotifier = 48,
        HasOrderedComponent = 49,
        FromState = 51,
        ToState = 52,
        HasCause = 53,
        HasEffect = 54,
        HasHistoricalConfiguration = 56,
        HasSubStateMachine = 117,
        AlwaysGeneratesEvent = 3065,
        HasTrueSubState = 9004,
        HasFalseSubState = 9005,
        HasCondition = 9006,
    ]
];

node_id_enum![
    ObjectId,
    OBJECT_NAMES,
    [
        ModellingRule_Mandatory = 78,
        ModellingRule_Optional = 80,
        RootFolder = 84,
        ObjectsFolder = 85,
        TypesFolder = 86,
        ViewsFolder = 87,
        ObjectTypesFolder = 88,
        VariableTypesFolder = 89,
        DataTypesFolder = 90,
        ReferenceTypesFolder = 91,
        XmlSchema_TypeSystem = 92,
        OPCBinarySchema_TypeSystem = 93,
        Argument_Encoding_DefaultXml = 297,
        Argument_Encoding_DefaultBinary = 298,
        BuildInfo_Encoding_DefaultXml = 339,
        BuildInfo_Encoding_DefaultBinary = 340,
        ServerStatusDataType_Encoding_DefaultXml = 863,
        ServerStatusDataType_Encoding_DefaultBinary = 864,
        Range_Encoding_DefaultXml = 885,
        Range_Encoding_DefaultBinary = 886,
        EUInformation_Encoding_DefaultXml = 888,
        EUInformation_Encoding_DefaultBinary = 889,
        Server = 2253,
        Server_ServerCapabilities = 2268,
        Server_ServerDiagnostics = 2274,
        Server_VendorServerInfo = 2295,
        Server_ServerRedundancy = 2296,
        EnumValueType_Encoding_DefaultXml = 7616,
        EnumValueType_Encoding_DefaultBinary = 8251,
        TimeZoneDataType_Encoding_DefaultXml = 8913,
        TimeZoneDataType_Encoding_DefaultBinary = 8917,
    ]
];

node_id_enum![
    ObjectTypeId,
    OBJECT_TYPE_NAMES,
    [
        BaseObjectType = 58,
        FolderType = 61,
        DataTypeSystemType = 75,
        DataTypeEncodingType = 76,
        ModellingRuleType = 77,
        ServerType = 2004,
        ServerCapabilitiesType = 2013,
        ServerDiagnosticsType = 2020,
        BaseEventType = 2041,
    ]
];

node_id_enum![
    VariableTypeId,
    VARIABLE_TYPE_NAMES,
    [
        BaseVariableType = 62,
        BaseDataVariableType = 63,
        PropertyType = 68,
        DataTypeDescriptionType = 69,
        DataTypeDictionaryType = 72,
        ServerVendorCapabilityType = 2137,
        ServerStatusType = 2138,
    ]
];

node_id_enum![
    VariableId,
    VARIABLE_NAMES,
    [
        Server_ServerArray = 2254,
        Server_NamespaceArray = 2255,
        Server_ServerStatus = 2256,
        Server_ServerStatus_StartTime = 2257,
        Server_ServerStatus_CurrentTime = 2258,
        Server_ServerStatus_State = 2259,
        Server_ServerStatus_BuildInfo = 2260,
        Server_ServiceLevel = 2267,
        Server_ServerStatus_SecondsTillShutdown = 2992,
        Server_ServerStatus_ShutdownReason = 2993,
    ]
];
