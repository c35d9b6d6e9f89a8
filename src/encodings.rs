//! Embedded character-encoding maps.
//!
//! The engine's font compiler needs a code-point map for single-byte
//! encodings: one `!XX U+YYYY` line per defined byte, mapping the byte to
//! its Unicode code point. The maps for every supported encoding are
//! embedded here base64-encoded and written into the compiled-font cache the
//! first time a font requests them (see
//! [`FontCache::encoding_map`](crate::fonts::FontCache::encoding_map)).
//!
//! Supported encodings: cp1250, cp1251, cp1252, cp1253, cp1254, cp1255,
//! cp1257, cp1258, cp874, iso-8859-1, iso-8859-11, iso-8859-15, iso-8859-16,
//! iso-8859-2, iso-8859-4, iso-8859-5, iso-8859-7, iso-8859-9, koi8-r,
//! koi8-u.

/// Base64-encoded map payloads, keyed by encoding name.
static ENCODINGS: &[(&str, &str)] = &[
    ("cp1250", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzIwQUMKITgyIFUrMjAxQQohODQgVSsyMDFFCiE4NSBVKzIwMjYKITg2IFUrMjAyMAohODcgVSsyMDIxCiE4OSBVKzIwMzAKIThBIFUrMDE2MAohOEIgVSsyMDM5CiE4QyBVKzAxNUEKIThEIFUrMDE2NAohOEUgVSswMTdECiE4RiBVKzAxNzkKITkxIFUrMjAxOAohOTIgVSsyMDE5CiE5MyBVKzIwMUMKITk0IFUrMjAxRAohOTUgVSsyMDIyCiE5NiBVKzIwMTMKITk3IFUrMjAxNAohOTkgVSsyMTIyCiE5QSBVKzAxNjEKITlCIFUrMjAzQQohOUMgVSswMTVCCiE5RCBVKzAxNjUKITlFIFUrMDE3RQohOUYgVSswMTdBCiFBMCBVKzAwQTAKIUExIFUrMDJDNwohQTIgVSswMkQ4CiFBMyBVKzAxNDEKIUE0IFUrMDBBNAohQTUgVSswMTA0CiFBNiBVKzAwQTYKIUE3IFUrMDBBNwohQTggVSswMEE4CiFBOSBVKzAwQTkKIUFBIFUrMDE1RQohQUIgVSswMEFCCiFBQyBVKzAwQUMKIUFEIFUrMDBBRAohQUUgVSswMEFFCiFBRiBVKzAxN0IKIUIwIFUrMDBCMAohQjEgVSswMEIxCiFCMiBVKzAyREIKIUIzIFUrMDE0MgohQjQgVSswMEI0CiFCNSBVKzAwQjUKIUI2IFUrMDBCNgohQjcgVSswMEI3CiFCOCBVKzAwQjgKIUI5IFUrMDEwNQohQkEgVSswMTVGCiFCQiBVKzAwQkIKIUJDIFUrMDEzRAohQkQgVSswMkRECiFCRSBVKzAxM0UKIUJGIFUrMDE3QwohQzAgVSswMTU0CiFDMSBVKzAwQzEKIUMyIFUrMDBDMgohQzMgVSswMTAyCiFDNCBVKzAwQzQKIUM1IFUrMDEzOQohQzYgVSswMTA2CiFDNyBVKzAwQzcKIUM4IFUrMDEwQwohQzkgVSswMEM5CiFDQSBVKzAxMTgKIUNCIFUrMDBDQgohQ0MgVSswMTFBCiFDRCBVKzAwQ0QKIUNFIFUrMDBDRQohQ0YgVSswMTBFCiFEMCBVKzAxMTAKIUQxIFUrMDE0MwohRDIgVSswMTQ3CiFEMyBVKzAwRDMKIUQ0IFUrMDBENAohRDUgVSswMTUwCiFENiBVKzAwRDYKIUQ3IFUrMDBENwohRDggVSswMTU4CiFEOSBVKzAxNkUKIURBIFUrMDBEQQohREIgVSswMTcwCiFEQyBVKzAwREMKIUREIFUrMDBERAohREUgVSswMTYyCiFERiBVKzAwREYKIUUwIFUrMDE1NQohRTEgVSswMEUxCiFFMiBVKzAwRTIKIUUzIFUrMDEwMwohRTQgVSswMEU0CiFFNSBVKzAxM0EKIUU2IFUrMDEwNwohRTcgVSswMEU3CiFFOCBVKzAxMEQKIUU5IFUrMDBFOQohRUEgVSswMTE5CiFFQiBVKzAwRUIKIUVDIFUrMDExQgohRUQgVSswMEVECiFFRSBVKzAwRUUKIUVGIFUrMDEwRgohRjAgVSswMTExCiFGMSBVKzAxNDQKIUYyIFUrMDE0OAohRjMgVSswMEYzCiFGNCBVKzAwRjQKIUY1IFUrMDE1MQohRjYgVSswMEY2CiFGNyBVKzAwRjcKIUY4IFUrMDE1OQohRjkgVSswMTZGCiFGQSBVKzAwRkEKIUZCIFUrMDE3MQohRkMgVSswMEZDCiFGRCBVKzAwRkQKIUZFIFUrMDE2MwohRkYgVSswMkQ5Cg=="),
    ("cp1251", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzA0MDIKITgxIFUrMDQwMwohODIgVSsyMDFBCiE4MyBVKzA0NTMKITg0IFUrMjAxRQohODUgVSsyMDI2CiE4NiBVKzIwMjAKITg3IFUrMjAyMQohODggVSsyMEFDCiE4OSBVKzIwMzAKIThBIFUrMDQwOQohOEIgVSsyMDM5CiE4QyBVKzA0MEEKIThEIFUrMDQwQwohOEUgVSswNDBCCiE4RiBVKzA0MEYKITkwIFUrMDQ1MgohOTEgVSsyMDE4CiE5MiBVKzIwMTkKITkzIFUrMjAxQwohOTQgVSsyMDFECiE5NSBVKzIwMjIKITk2IFUrMjAxMwohOTcgVSsyMDE0CiE5OSBVKzIxMjIKITlBIFUrMDQ1OQohOUIgVSsyMDNBCiE5QyBVKzA0NUEKITlEIFUrMDQ1QwohOUUgVSswNDVCCiE5RiBVKzA0NUYKIUEwIFUrMDBBMAohQTEgVSswNDBFCiFBMiBVKzA0NUUKIUEzIFUrMDQwOAohQTQgVSswMEE0CiFBNSBVKzA0OTAKIUE2IFUrMDBBNgohQTcgVSswMEE3CiFBOCBVKzA0MDEKIUE5IFUrMDBBOQohQUEgVSswNDA0CiFBQiBVKzAwQUIKIUFDIFUrMDBBQwohQUQgVSswMEFECiFBRSBVKzAwQUUKIUFGIFUrMDQwNwohQjAgVSswMEIwCiFCMSBVKzAwQjEKIUIyIFUrMDQwNgohQjMgVSswNDU2CiFCNCBVKzA0OTEKIUI1IFUrMDBCNQohQjYgVSswMEI2CiFCNyBVKzAwQjcKIUI4IFUrMDQ1MQohQjkgVSsyMTE2CiFCQSBVKzA0NTQKIUJCIFUrMDBCQgohQkMgVSswNDU4CiFCRCBVKzA0MDUKIUJFIFUrMDQ1NQohQkYgVSswNDU3CiFDMCBVKzA0MTAKIUMxIFUrMDQxMQohQzIgVSswNDEyCiFDMyBVKzA0MTMKIUM0IFUrMDQxNAohQzUgVSswNDE1CiFDNiBVKzA0MTYKIUM3IFUrMDQxNwohQzggVSswNDE4CiFDOSBVKzA0MTkKIUNBIFUrMDQxQQohQ0IgVSswNDFCCiFDQyBVKzA0MUMKIUNEIFUrMDQxRAohQ0UgVSswNDFFCiFDRiBVKzA0MUYKIUQwIFUrMDQyMAohRDEgVSswNDIxCiFEMiBVKzA0MjIKIUQzIFUrMDQyMwohRDQgVSswNDI0CiFENSBVKzA0MjUKIUQ2IFUrMDQyNgohRDcgVSswNDI3CiFEOCBVKzA0MjgKIUQ5IFUrMDQyOQohREEgVSswNDJBCiFEQiBVKzA0MkIKIURDIFUrMDQyQwohREQgVSswNDJECiFERSBVKzA0MkUKIURGIFUrMDQyRgohRTAgVSswNDMwCiFFMSBVKzA0MzEKIUUyIFUrMDQzMgohRTMgVSswNDMzCiFFNCBVKzA0MzQKIUU1IFUrMDQzNQohRTYgVSswNDM2CiFFNyBVKzA0MzcKIUU4IFUrMDQzOAohRTkgVSswNDM5CiFFQSBVKzA0M0EKIUVCIFUrMDQzQgohRUMgVSswNDNDCiFFRCBVKzA0M0QKIUVFIFUrMDQzRQohRUYgVSswNDNGCiFGMCBVKzA0NDAKIUYxIFUrMDQ0MQohRjIgVSswNDQyCiFGMyBVKzA0NDMKIUY0IFUrMDQ0NAohRjUgVSswNDQ1CiFGNiBVKzA0NDYKIUY3IFUrMDQ0NwohRjggVSswNDQ4CiFGOSBVKzA0NDkKIUZBIFUrMDQ0QQohRkIgVSswNDRCCiFGQyBVKzA0NEMKIUZEIFUrMDQ0RAohRkUgVSswNDRFCiFGRiBVKzA0NEYK"),
    ("cp1252", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzIwQUMKITgyIFUrMjAxQQohODMgVSswMTkyCiE4NCBVKzIwMUUKITg1IFUrMjAyNgohODYgVSsyMDIwCiE4NyBVKzIwMjEKITg4IFUrMDJDNgohODkgVSsyMDMwCiE4QSBVKzAxNjAKIThCIFUrMjAzOQohOEMgVSswMTUyCiE4RSBVKzAxN0QKITkxIFUrMjAxOAohOTIgVSsyMDE5CiE5MyBVKzIwMUMKITk0IFUrMjAxRAohOTUgVSsyMDIyCiE5NiBVKzIwMTMKITk3IFUrMjAxNAohOTggVSswMkRDCiE5OSBVKzIxMjIKITlBIFUrMDE2MQohOUIgVSsyMDNBCiE5QyBVKzAxNTMKITlFIFUrMDE3RQohOUYgVSswMTc4CiFBMCBVKzAwQTAKIUExIFUrMDBBMQohQTIgVSswMEEyCiFBMyBVKzAwQTMKIUE0IFUrMDBBNAohQTUgVSswMEE1CiFBNiBVKzAwQTYKIUE3IFUrMDBBNwohQTggVSswMEE4CiFBOSBVKzAwQTkKIUFBIFUrMDBBQQohQUIgVSswMEFCCiFBQyBVKzAwQUMKIUFEIFUrMDBBRAohQUUgVSswMEFFCiFBRiBVKzAwQUYKIUIwIFUrMDBCMAohQjEgVSswMEIxCiFCMiBVKzAwQjIKIUIzIFUrMDBCMwohQjQgVSswMEI0CiFCNSBVKzAwQjUKIUI2IFUrMDBCNgohQjcgVSswMEI3CiFCOCBVKzAwQjgKIUI5IFUrMDBCOQohQkEgVSswMEJBCiFCQiBVKzAwQkIKIUJDIFUrMDBCQwohQkQgVSswMEJECiFCRSBVKzAwQkUKIUJGIFUrMDBCRgohQzAgVSswMEMwCiFDMSBVKzAwQzEKIUMyIFUrMDBDMgohQzMgVSswMEMzCiFDNCBVKzAwQzQKIUM1IFUrMDBDNQohQzYgVSswMEM2CiFDNyBVKzAwQzcKIUM4IFUrMDBDOAohQzkgVSswMEM5CiFDQSBVKzAwQ0EKIUNCIFUrMDBDQgohQ0MgVSswMENDCiFDRCBVKzAwQ0QKIUNFIFUrMDBDRQohQ0YgVSswMENGCiFEMCBVKzAwRDAKIUQxIFUrMDBEMQohRDIgVSswMEQyCiFEMyBVKzAwRDMKIUQ0IFUrMDBENAohRDUgVSswMEQ1CiFENiBVKzAwRDYKIUQ3IFUrMDBENwohRDggVSswMEQ4CiFEOSBVKzAwRDkKIURBIFUrMDBEQQohREIgVSswMERCCiFEQyBVKzAwREMKIUREIFUrMDBERAohREUgVSswMERFCiFERiBVKzAwREYKIUUwIFUrMDBFMAohRTEgVSswMEUxCiFFMiBVKzAwRTIKIUUzIFUrMDBFMwohRTQgVSswMEU0CiFFNSBVKzAwRTUKIUU2IFUrMDBFNgohRTcgVSswMEU3CiFFOCBVKzAwRTgKIUU5IFUrMDBFOQohRUEgVSswMEVBCiFFQiBVKzAwRUIKIUVDIFUrMDBFQwohRUQgVSswMEVECiFFRSBVKzAwRUUKIUVGIFUrMDBFRgohRjAgVSswMEYwCiFGMSBVKzAwRjEKIUYyIFUrMDBGMgohRjMgVSswMEYzCiFGNCBVKzAwRjQKIUY1IFUrMDBGNQohRjYgVSswMEY2CiFGNyBVKzAwRjcKIUY4IFUrMDBGOAohRjkgVSswMEY5CiFGQSBVKzAwRkEKIUZCIFUrMDBGQgohRkMgVSswMEZDCiFGRCBVKzAwRkQKIUZFIFUrMDBGRQohRkYgVSswMEZGCg=="),
    ("cp1253", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzIwQUMKITgyIFUrMjAxQQohODMgVSswMTkyCiE4NCBVKzIwMUUKITg1IFUrMjAyNgohODYgVSsyMDIwCiE4NyBVKzIwMjEKITg5IFUrMjAzMAohOEIgVSsyMDM5CiE5MSBVKzIwMTgKITkyIFUrMjAxOQohOTMgVSsyMDFDCiE5NCBVKzIwMUQKITk1IFUrMjAyMgohOTYgVSsyMDEzCiE5NyBVKzIwMTQKITk5IFUrMjEyMgohOUIgVSsyMDNBCiFBMCBVKzAwQTAKIUExIFUrMDM4NQohQTIgVSswMzg2CiFBMyBVKzAwQTMKIUE0IFUrMDBBNAohQTUgVSswMEE1CiFBNiBVKzAwQTYKIUE3IFUrMDBBNwohQTggVSswMEE4CiFBOSBVKzAwQTkKIUFCIFUrMDBBQgohQUMgVSswMEFDCiFBRCBVKzAwQUQKIUFFIFUrMDBBRQohQUYgVSsyMDE1CiFCMCBVKzAwQjAKIUIxIFUrMDBCMQohQjIgVSswMEIyCiFCMyBVKzAwQjMKIUI0IFUrMDM4NAohQjUgVSswMEI1CiFCNiBVKzAwQjYKIUI3IFUrMDBCNwohQjggVSswMzg4CiFCOSBVKzAzODkKIUJBIFUrMDM4QQohQkIgVSswMEJCCiFCQyBVKzAzOEMKIUJEIFUrMDBCRAohQkUgVSswMzhFCiFCRiBVKzAzOEYKIUMwIFUrMDM5MAohQzEgVSswMzkxCiFDMiBVKzAzOTIKIUMzIFUrMDM5MwohQzQgVSswMzk0CiFDNSBVKzAzOTUKIUM2IFUrMDM5NgohQzcgVSswMzk3CiFDOCBVKzAzOTgKIUM5IFUrMDM5OQohQ0EgVSswMzlBCiFDQiBVKzAzOUIKIUNDIFUrMDM5QwohQ0QgVSswMzlECiFDRSBVKzAzOUUKIUNGIFUrMDM5RgohRDAgVSswM0EwCiFEMSBVKzAzQTEKIUQzIFUrMDNBMwohRDQgVSswM0E0CiFENSBVKzAzQTUKIUQ2IFUrMDNBNgohRDcgVSswM0E3CiFEOCBVKzAzQTgKIUQ5IFUrMDNBOQohREEgVSswM0FBCiFEQiBVKzAzQUIKIURDIFUrMDNBQwohREQgVSswM0FECiFERSBVKzAzQUUKIURGIFUrMDNBRgohRTAgVSswM0IwCiFFMSBVKzAzQjEKIUUyIFUrMDNCMgohRTMgVSswM0IzCiFFNCBVKzAzQjQKIUU1IFUrMDNCNQohRTYgVSswM0I2CiFFNyBVKzAzQjcKIUU4IFUrMDNCOAohRTkgVSswM0I5CiFFQSBVKzAzQkEKIUVCIFUrMDNCQgohRUMgVSswM0JDCiFFRCBVKzAzQkQKIUVFIFUrMDNCRQohRUYgVSswM0JGCiFGMCBVKzAzQzAKIUYxIFUrMDNDMQohRjIgVSswM0MyCiFGMyBVKzAzQzMKIUY0IFUrMDNDNAohRjUgVSswM0M1CiFGNiBVKzAzQzYKIUY3IFUrMDNDNwohRjggVSswM0M4CiFGOSBVKzAzQzkKIUZBIFUrMDNDQQohRkIgVSswM0NCCiFGQyBVKzAzQ0MKIUZEIFUrMDNDRAohRkUgVSswM0NFCg=="),
    ("cp1254", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzIwQUMKITgyIFUrMjAxQQohODMgVSswMTkyCiE4NCBVKzIwMUUKITg1IFUrMjAyNgohODYgVSsyMDIwCiE4NyBVKzIwMjEKITg4IFUrMDJDNgohODkgVSsyMDMwCiE4QSBVKzAxNjAKIThCIFUrMjAzOQohOEMgVSswMTUyCiE5MSBVKzIwMTgKITkyIFUrMjAxOQohOTMgVSsyMDFDCiE5NCBVKzIwMUQKITk1IFUrMjAyMgohOTYgVSsyMDEzCiE5NyBVKzIwMTQKITk4IFUrMDJEQwohOTkgVSsyMTIyCiE5QSBVKzAxNjEKITlCIFUrMjAzQQohOUMgVSswMTUzCiE5RiBVKzAxNzgKIUEwIFUrMDBBMAohQTEgVSswMEExCiFBMiBVKzAwQTIKIUEzIFUrMDBBMwohQTQgVSswMEE0CiFBNSBVKzAwQTUKIUE2IFUrMDBBNgohQTcgVSswMEE3CiFBOCBVKzAwQTgKIUE5IFUrMDBBOQohQUEgVSswMEFBCiFBQiBVKzAwQUIKIUFDIFUrMDBBQwohQUQgVSswMEFECiFBRSBVKzAwQUUKIUFGIFUrMDBBRgohQjAgVSswMEIwCiFCMSBVKzAwQjEKIUIyIFUrMDBCMgohQjMgVSswMEIzCiFCNCBVKzAwQjQKIUI1IFUrMDBCNQohQjYgVSswMEI2CiFCNyBVKzAwQjcKIUI4IFUrMDBCOAohQjkgVSswMEI5CiFCQSBVKzAwQkEKIUJCIFUrMDBCQgohQkMgVSswMEJDCiFCRCBVKzAwQkQKIUJFIFUrMDBCRQohQkYgVSswMEJGCiFDMCBVKzAwQzAKIUMxIFUrMDBDMQohQzIgVSswMEMyCiFDMyBVKzAwQzMKIUM0IFUrMDBDNAohQzUgVSswMEM1CiFDNiBVKzAwQzYKIUM3IFUrMDBDNwohQzggVSswMEM4CiFDOSBVKzAwQzkKIUNBIFUrMDBDQQohQ0IgVSswMENCCiFDQyBVKzAwQ0MKIUNEIFUrMDBDRAohQ0UgVSswMENFCiFDRiBVKzAwQ0YKIUQwIFUrMDExRQohRDEgVSswMEQxCiFEMiBVKzAwRDIKIUQzIFUrMDBEMwohRDQgVSswMEQ0CiFENSBVKzAwRDUKIUQ2IFUrMDBENgohRDcgVSswMEQ3CiFEOCBVKzAwRDgKIUQ5IFUrMDBEOQohREEgVSswMERBCiFEQiBVKzAwREIKIURDIFUrMDBEQwohREQgVSswMTMwCiFERSBVKzAxNUUKIURGIFUrMDBERgohRTAgVSswMEUwCiFFMSBVKzAwRTEKIUUyIFUrMDBFMgohRTMgVSswMEUzCiFFNCBVKzAwRTQKIUU1IFUrMDBFNQohRTYgVSswMEU2CiFFNyBVKzAwRTcKIUU4IFUrMDBFOAohRTkgVSswMEU5CiFFQSBVKzAwRUEKIUVCIFUrMDBFQgohRUMgVSswMEVDCiFFRCBVKzAwRUQKIUVFIFUrMDBFRQohRUYgVSswMEVGCiFGMCBVKzAxMUYKIUYxIFUrMDBGMQohRjIgVSswMEYyCiFGMyBVKzAwRjMKIUY0IFUrMDBGNAohRjUgVSswMEY1CiFGNiBVKzAwRjYKIUY3IFUrMDBGNwohRjggVSswMEY4CiFGOSBVKzAwRjkKIUZBIFUrMDBGQQohRkIgVSswMEZCCiFGQyBVKzAwRkMKIUZEIFUrMDEzMQohRkUgVSswMTVGCiFGRiBVKzAwRkYK"),
    ("cp1255", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzIwQUMKITgyIFUrMjAxQQohODMgVSswMTkyCiE4NCBVKzIwMUUKITg1IFUrMjAyNgohODYgVSsyMDIwCiE4NyBVKzIwMjEKITg4IFUrMDJDNgohODkgVSsyMDMwCiE4QiBVKzIwMzkKITkxIFUrMjAxOAohOTIgVSsyMDE5CiE5MyBVKzIwMUMKITk0IFUrMjAxRAohOTUgVSsyMDIyCiE5NiBVKzIwMTMKITk3IFUrMjAxNAohOTggVSswMkRDCiE5OSBVKzIxMjIKITlCIFUrMjAzQQohQTAgVSswMEEwCiFBMSBVKzAwQTEKIUEyIFUrMDBBMgohQTMgVSswMEEzCiFBNCBVKzIwQUEKIUE1IFUrMDBBNQohQTYgVSswMEE2CiFBNyBVKzAwQTcKIUE4IFUrMDBBOAohQTkgVSswMEE5CiFBQSBVKzAwRDcKIUFCIFUrMDBBQgohQUMgVSswMEFDCiFBRCBVKzAwQUQKIUFFIFUrMDBBRQohQUYgVSswMEFGCiFCMCBVKzAwQjAKIUIxIFUrMDBCMQohQjIgVSswMEIyCiFCMyBVKzAwQjMKIUI0IFUrMDBCNAohQjUgVSswMEI1CiFCNiBVKzAwQjYKIUI3IFUrMDBCNwohQjggVSswMEI4CiFCOSBVKzAwQjkKIUJBIFUrMDBGNwohQkIgVSswMEJCCiFCQyBVKzAwQkMKIUJEIFUrMDBCRAohQkUgVSswMEJFCiFCRiBVKzAwQkYKIUMwIFUrMDVCMAohQzEgVSswNUIxCiFDMiBVKzA1QjIKIUMzIFUrMDVCMwohQzQgVSswNUI0CiFDNSBVKzA1QjUKIUM2IFUrMDVCNgohQzcgVSswNUI3CiFDOCBVKzA1QjgKIUM5IFUrMDVCOQohQ0IgVSswNUJCCiFDQyBVKzA1QkMKIUNEIFUrMDVCRAohQ0UgVSswNUJFCiFDRiBVKzA1QkYKIUQwIFUrMDVDMAohRDEgVSswNUMxCiFEMiBVKzA1QzIKIUQzIFUrMDVDMwohRDQgVSswNUYwCiFENSBVKzA1RjEKIUQ2IFUrMDVGMgohRDcgVSswNUYzCiFEOCBVKzA1RjQKIUUwIFUrMDVEMAohRTEgVSswNUQxCiFFMiBVKzA1RDIKIUUzIFUrMDVEMwohRTQgVSswNUQ0CiFFNSBVKzA1RDUKIUU2IFUrMDVENgohRTcgVSswNUQ3CiFFOCBVKzA1RDgKIUU5IFUrMDVEOQohRUEgVSswNURBCiFFQiBVKzA1REIKIUVDIFUrMDVEQwohRUQgVSswNURECiFFRSBVKzA1REUKIUVGIFUrMDVERgohRjAgVSswNUUwCiFGMSBVKzA1RTEKIUYyIFUrMDVFMgohRjMgVSswNUUzCiFGNCBVKzA1RTQKIUY1IFUrMDVFNQohRjYgVSswNUU2CiFGNyBVKzA1RTcKIUY4IFUrMDVFOAohRjkgVSswNUU5CiFGQSBVKzA1RUEKIUZEIFUrMjAwRQohRkUgVSsyMDBGCg=="),
    ("cp1257", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzIwQUMKITgyIFUrMjAxQQohODQgVSsyMDFFCiE4NSBVKzIwMjYKITg2IFUrMjAyMAohODcgVSsyMDIxCiE4OSBVKzIwMzAKIThCIFUrMjAzOQohOEQgVSswMEE4CiE4RSBVKzAyQzcKIThGIFUrMDBCOAohOTEgVSsyMDE4CiE5MiBVKzIwMTkKITkzIFUrMjAxQwohOTQgVSsyMDFECiE5NSBVKzIwMjIKITk2IFUrMjAxMwohOTcgVSsyMDE0CiE5OSBVKzIxMjIKITlCIFUrMjAzQQohOUQgVSswMEFGCiE5RSBVKzAyREIKIUEwIFUrMDBBMAohQTIgVSswMEEyCiFBMyBVKzAwQTMKIUE0IFUrMDBBNAohQTYgVSswMEE2CiFBNyBVKzAwQTcKIUE4IFUrMDBEOAohQTkgVSswMEE5CiFBQSBVKzAxNTYKIUFCIFUrMDBBQgohQUMgVSswMEFDCiFBRCBVKzAwQUQKIUFFIFUrMDBBRQohQUYgVSswMEM2CiFCMCBVKzAwQjAKIUIxIFUrMDBCMQohQjIgVSswMEIyCiFCMyBVKzAwQjMKIUI0IFUrMDBCNAohQjUgVSswMEI1CiFCNiBVKzAwQjYKIUI3IFUrMDBCNwohQjggVSswMEY4CiFCOSBVKzAwQjkKIUJBIFUrMDE1NwohQkIgVSswMEJCCiFCQyBVKzAwQkMKIUJEIFUrMDBCRAohQkUgVSswMEJFCiFCRiBVKzAwRTYKIUMwIFUrMDEwNAohQzEgVSswMTJFCiFDMiBVKzAxMDAKIUMzIFUrMDEwNgohQzQgVSswMEM0CiFDNSBVKzAwQzUKIUM2IFUrMDExOAohQzcgVSswMTEyCiFDOCBVKzAxMEMKIUM5IFUrMDBDOQohQ0EgVSswMTc5CiFDQiBVKzAxMTYKIUNDIFUrMDEyMgohQ0QgVSswMTM2CiFDRSBVKzAxMkEKIUNGIFUrMDEzQgohRDAgVSswMTYwCiFEMSBVKzAxNDMKIUQyIFUrMDE0NQohRDMgVSswMEQzCiFENCBVKzAxNEMKIUQ1IFUrMDBENQohRDYgVSswMEQ2CiFENyBVKzAwRDcKIUQ4IFUrMDE3MgohRDkgVSswMTQxCiFEQSBVKzAxNUEKIURCIFUrMDE2QQohREMgVSswMERDCiFERCBVKzAxN0IKIURFIFUrMDE3RAohREYgVSswMERGCiFFMCBVKzAxMDUKIUUxIFUrMDEyRgohRTIgVSswMTAxCiFFMyBVKzAxMDcKIUU0IFUrMDBFNAohRTUgVSswMEU1CiFFNiBVKzAxMTkKIUU3IFUrMDExMwohRTggVSswMTBECiFFOSBVKzAwRTkKIUVBIFUrMDE3QQohRUIgVSswMTE3CiFFQyBVKzAxMjMKIUVEIFUrMDEzNwohRUUgVSswMTJCCiFFRiBVKzAxM0MKIUYwIFUrMDE2MQohRjEgVSswMTQ0CiFGMiBVKzAxNDYKIUYzIFUrMDBGMwohRjQgVSswMTRECiFGNSBVKzAwRjUKIUY2IFUrMDBGNgohRjcgVSswMEY3CiFGOCBVKzAxNzMKIUY5IFUrMDE0MgohRkEgVSswMTVCCiFGQiBVKzAxNkIKIUZDIFUrMDBGQwohRkQgVSswMTdDCiFGRSBVKzAxN0UKIUZGIFUrMDJEOQo="),
    ("cp1258", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzIwQUMKITgyIFUrMjAxQQohODMgVSswMTkyCiE4NCBVKzIwMUUKITg1IFUrMjAyNgohODYgVSsyMDIwCiE4NyBVKzIwMjEKITg4IFUrMDJDNgohODkgVSsyMDMwCiE4QiBVKzIwMzkKIThDIFUrMDE1MgohOTEgVSsyMDE4CiE5MiBVKzIwMTkKITkzIFUrMjAxQwohOTQgVSsyMDFECiE5NSBVKzIwMjIKITk2IFUrMjAxMwohOTcgVSsyMDE0CiE5OCBVKzAyREMKITk5IFUrMjEyMgohOUIgVSsyMDNBCiE5QyBVKzAxNTMKITlGIFUrMDE3OAohQTAgVSswMEEwCiFBMSBVKzAwQTEKIUEyIFUrMDBBMgohQTMgVSswMEEzCiFBNCBVKzAwQTQKIUE1IFUrMDBBNQohQTYgVSswMEE2CiFBNyBVKzAwQTcKIUE4IFUrMDBBOAohQTkgVSswMEE5CiFBQSBVKzAwQUEKIUFCIFUrMDBBQgohQUMgVSswMEFDCiFBRCBVKzAwQUQKIUFFIFUrMDBBRQohQUYgVSswMEFGCiFCMCBVKzAwQjAKIUIxIFUrMDBCMQohQjIgVSswMEIyCiFCMyBVKzAwQjMKIUI0IFUrMDBCNAohQjUgVSswMEI1CiFCNiBVKzAwQjYKIUI3IFUrMDBCNwohQjggVSswMEI4CiFCOSBVKzAwQjkKIUJBIFUrMDBCQQohQkIgVSswMEJCCiFCQyBVKzAwQkMKIUJEIFUrMDBCRAohQkUgVSswMEJFCiFCRiBVKzAwQkYKIUMwIFUrMDBDMAohQzEgVSswMEMxCiFDMiBVKzAwQzIKIUMzIFUrMDEwMgohQzQgVSswMEM0CiFDNSBVKzAwQzUKIUM2IFUrMDBDNgohQzcgVSswMEM3CiFDOCBVKzAwQzgKIUM5IFUrMDBDOQohQ0EgVSswMENBCiFDQiBVKzAwQ0IKIUNDIFUrMDMwMAohQ0QgVSswMENECiFDRSBVKzAwQ0UKIUNGIFUrMDBDRgohRDAgVSswMTEwCiFEMSBVKzAwRDEKIUQyIFUrMDMwOQohRDMgVSswMEQzCiFENCBVKzAwRDQKIUQ1IFUrMDFBMAohRDYgVSswMEQ2CiFENyBVKzAwRDcKIUQ4IFUrMDBEOAohRDkgVSswMEQ5CiFEQSBVKzAwREEKIURCIFUrMDBEQgohREMgVSswMERDCiFERCBVKzAxQUYKIURFIFUrMDMwMwohREYgVSswMERGCiFFMCBVKzAwRTAKIUUxIFUrMDBFMQohRTIgVSswMEUyCiFFMyBVKzAxMDMKIUU0IFUrMDBFNAohRTUgVSswMEU1CiFFNiBVKzAwRTYKIUU3IFUrMDBFNwohRTggVSswMEU4CiFFOSBVKzAwRTkKIUVBIFUrMDBFQQohRUIgVSswMEVCCiFFQyBVKzAzMDEKIUVEIFUrMDBFRAohRUUgVSswMEVFCiFFRiBVKzAwRUYKIUYwIFUrMDExMQohRjEgVSswMEYxCiFGMiBVKzAzMjMKIUYzIFUrMDBGMwohRjQgVSswMEY0CiFGNSBVKzAxQTEKIUY2IFUrMDBGNgohRjcgVSswMEY3CiFGOCBVKzAwRjgKIUY5IFUrMDBGOQohRkEgVSswMEZBCiFGQiBVKzAwRkIKIUZDIFUrMDBGQwohRkQgVSswMUIwCiFGRSBVKzIwQUIKIUZGIFUrMDBGRgo="),
    ("cp874", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzIwQUMKITg1IFUrMjAyNgohOTEgVSsyMDE4CiE5MiBVKzIwMTkKITkzIFUrMjAxQwohOTQgVSsyMDFECiE5NSBVKzIwMjIKITk2IFUrMjAxMwohOTcgVSsyMDE0CiFBMCBVKzAwQTAKIUExIFUrMEUwMQohQTIgVSswRTAyCiFBMyBVKzBFMDMKIUE0IFUrMEUwNAohQTUgVSswRTA1CiFBNiBVKzBFMDYKIUE3IFUrMEUwNwohQTggVSswRTA4CiFBOSBVKzBFMDkKIUFBIFUrMEUwQQohQUIgVSswRTBCCiFBQyBVKzBFMEMKIUFEIFUrMEUwRAohQUUgVSswRTBFCiFBRiBVKzBFMEYKIUIwIFUrMEUxMAohQjEgVSswRTExCiFCMiBVKzBFMTIKIUIzIFUrMEUxMwohQjQgVSswRTE0CiFCNSBVKzBFMTUKIUI2IFUrMEUxNgohQjcgVSswRTE3CiFCOCBVKzBFMTgKIUI5IFUrMEUxOQohQkEgVSswRTFBCiFCQiBVKzBFMUIKIUJDIFUrMEUxQwohQkQgVSswRTFECiFCRSBVKzBFMUUKIUJGIFUrMEUxRgohQzAgVSswRTIwCiFDMSBVKzBFMjEKIUMyIFUrMEUyMgohQzMgVSswRTIzCiFDNCBVKzBFMjQKIUM1IFUrMEUyNQohQzYgVSswRTI2CiFDNyBVKzBFMjcKIUM4IFUrMEUyOAohQzkgVSswRTI5CiFDQSBVKzBFMkEKIUNCIFUrMEUyQgohQ0MgVSswRTJDCiFDRCBVKzBFMkQKIUNFIFUrMEUyRQohQ0YgVSswRTJGCiFEMCBVKzBFMzAKIUQxIFUrMEUzMQohRDIgVSswRTMyCiFEMyBVKzBFMzMKIUQ0IFUrMEUzNAohRDUgVSswRTM1CiFENiBVKzBFMzYKIUQ3IFUrMEUzNwohRDggVSswRTM4CiFEOSBVKzBFMzkKIURBIFUrMEUzQQohREYgVSswRTNGCiFFMCBVKzBFNDAKIUUxIFUrMEU0MQohRTIgVSswRTQyCiFFMyBVKzBFNDMKIUU0IFUrMEU0NAohRTUgVSswRTQ1CiFFNiBVKzBFNDYKIUU3IFUrMEU0NwohRTggVSswRTQ4CiFFOSBVKzBFNDkKIUVBIFUrMEU0QQohRUIgVSswRTRCCiFFQyBVKzBFNEMKIUVEIFUrMEU0RAohRUUgVSswRTRFCiFFRiBVKzBFNEYKIUYwIFUrMEU1MAohRjEgVSswRTUxCiFGMiBVKzBFNTIKIUYzIFUrMEU1MwohRjQgVSswRTU0CiFGNSBVKzBFNTUKIUY2IFUrMEU1NgohRjcgVSswRTU3CiFGOCBVKzBFNTgKIUY5IFUrMEU1OQohRkEgVSswRTVBCiFGQiBVKzBFNUIK"),
    ("iso-8859-1", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzAwODAKITgxIFUrMDA4MQohODIgVSswMDgyCiE4MyBVKzAwODMKITg0IFUrMDA4NAohODUgVSswMDg1CiE4NiBVKzAwODYKITg3IFUrMDA4NwohODggVSswMDg4CiE4OSBVKzAwODkKIThBIFUrMDA4QQohOEIgVSswMDhCCiE4QyBVKzAwOEMKIThEIFUrMDA4RAohOEUgVSswMDhFCiE4RiBVKzAwOEYKITkwIFUrMDA5MAohOTEgVSswMDkxCiE5MiBVKzAwOTIKITkzIFUrMDA5MwohOTQgVSswMDk0CiE5NSBVKzAwOTUKITk2IFUrMDA5NgohOTcgVSswMDk3CiE5OCBVKzAwOTgKITk5IFUrMDA5OQohOUEgVSswMDlBCiE5QiBVKzAwOUIKITlDIFUrMDA5QwohOUQgVSswMDlECiE5RSBVKzAwOUUKITlGIFUrMDA5RgohQTAgVSswMEEwCiFBMSBVKzAwQTEKIUEyIFUrMDBBMgohQTMgVSswMEEzCiFBNCBVKzAwQTQKIUE1IFUrMDBBNQohQTYgVSswMEE2CiFBNyBVKzAwQTcKIUE4IFUrMDBBOAohQTkgVSswMEE5CiFBQSBVKzAwQUEKIUFCIFUrMDBBQgohQUMgVSswMEFDCiFBRCBVKzAwQUQKIUFFIFUrMDBBRQohQUYgVSswMEFGCiFCMCBVKzAwQjAKIUIxIFUrMDBCMQohQjIgVSswMEIyCiFCMyBVKzAwQjMKIUI0IFUrMDBCNAohQjUgVSswMEI1CiFCNiBVKzAwQjYKIUI3IFUrMDBCNwohQjggVSswMEI4CiFCOSBVKzAwQjkKIUJBIFUrMDBCQQohQkIgVSswMEJCCiFCQyBVKzAwQkMKIUJEIFUrMDBCRAohQkUgVSswMEJFCiFCRiBVKzAwQkYKIUMwIFUrMDBDMAohQzEgVSswMEMxCiFDMiBVKzAwQzIKIUMzIFUrMDBDMwohQzQgVSswMEM0CiFDNSBVKzAwQzUKIUM2IFUrMDBDNgohQzcgVSswMEM3CiFDOCBVKzAwQzgKIUM5IFUrMDBDOQohQ0EgVSswMENBCiFDQiBVKzAwQ0IKIUNDIFUrMDBDQwohQ0QgVSswMENECiFDRSBVKzAwQ0UKIUNGIFUrMDBDRgohRDAgVSswMEQwCiFEMSBVKzAwRDEKIUQyIFUrMDBEMgohRDMgVSswMEQzCiFENCBVKzAwRDQKIUQ1IFUrMDBENQohRDYgVSswMEQ2CiFENyBVKzAwRDcKIUQ4IFUrMDBEOAohRDkgVSswMEQ5CiFEQSBVKzAwREEKIURCIFUrMDBEQgohREMgVSswMERDCiFERCBVKzAwREQKIURFIFUrMDBERQohREYgVSswMERGCiFFMCBVKzAwRTAKIUUxIFUrMDBFMQohRTIgVSswMEUyCiFFMyBVKzAwRTMKIUU0IFUrMDBFNAohRTUgVSswMEU1CiFFNiBVKzAwRTYKIUU3IFUrMDBFNwohRTggVSswMEU4CiFFOSBVKzAwRTkKIUVBIFUrMDBFQQohRUIgVSswMEVCCiFFQyBVKzAwRUMKIUVEIFUrMDBFRAohRUUgVSswMEVFCiFFRiBVKzAwRUYKIUYwIFUrMDBGMAohRjEgVSswMEYxCiFGMiBVKzAwRjIKIUYzIFUrMDBGMwohRjQgVSswMEY0CiFGNSBVKzAwRjUKIUY2IFUrMDBGNgohRjcgVSswMEY3CiFGOCBVKzAwRjgKIUY5IFUrMDBGOQohRkEgVSswMEZBCiFGQiBVKzAwRkIKIUZDIFUrMDBGQwohRkQgVSswMEZECiFGRSBVKzAwRkUKIUZGIFUrMDBGRgo="),
    ("iso-8859-11", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzAwODAKITgxIFUrMDA4MQohODIgVSswMDgyCiE4MyBVKzAwODMKITg0IFUrMDA4NAohODUgVSswMDg1CiE4NiBVKzAwODYKITg3IFUrMDA4NwohODggVSswMDg4CiE4OSBVKzAwODkKIThBIFUrMDA4QQohOEIgVSswMDhCCiE4QyBVKzAwOEMKIThEIFUrMDA4RAohOEUgVSswMDhFCiE4RiBVKzAwOEYKITkwIFUrMDA5MAohOTEgVSswMDkxCiE5MiBVKzAwOTIKITkzIFUrMDA5MwohOTQgVSswMDk0CiE5NSBVKzAwOTUKITk2IFUrMDA5NgohOTcgVSswMDk3CiE5OCBVKzAwOTgKITk5IFUrMDA5OQohOUEgVSswMDlBCiE5QiBVKzAwOUIKITlDIFUrMDA5QwohOUQgVSswMDlECiE5RSBVKzAwOUUKITlGIFUrMDA5RgohQTAgVSswMEEwCiFBMSBVKzBFMDEKIUEyIFUrMEUwMgohQTMgVSswRTAzCiFBNCBVKzBFMDQKIUE1IFUrMEUwNQohQTYgVSswRTA2CiFBNyBVKzBFMDcKIUE4IFUrMEUwOAohQTkgVSswRTA5CiFBQSBVKzBFMEEKIUFCIFUrMEUwQgohQUMgVSswRTBDCiFBRCBVKzBFMEQKIUFFIFUrMEUwRQohQUYgVSswRTBGCiFCMCBVKzBFMTAKIUIxIFUrMEUxMQohQjIgVSswRTEyCiFCMyBVKzBFMTMKIUI0IFUrMEUxNAohQjUgVSswRTE1CiFCNiBVKzBFMTYKIUI3IFUrMEUxNwohQjggVSswRTE4CiFCOSBVKzBFMTkKIUJBIFUrMEUxQQohQkIgVSswRTFCCiFCQyBVKzBFMUMKIUJEIFUrMEUxRAohQkUgVSswRTFFCiFCRiBVKzBFMUYKIUMwIFUrMEUyMAohQzEgVSswRTIxCiFDMiBVKzBFMjIKIUMzIFUrMEUyMwohQzQgVSswRTI0CiFDNSBVKzBFMjUKIUM2IFUrMEUyNgohQzcgVSswRTI3CiFDOCBVKzBFMjgKIUM5IFUrMEUyOQohQ0EgVSswRTJBCiFDQiBVKzBFMkIKIUNDIFUrMEUyQwohQ0QgVSswRTJECiFDRSBVKzBFMkUKIUNGIFUrMEUyRgohRDAgVSswRTMwCiFEMSBVKzBFMzEKIUQyIFUrMEUzMgohRDMgVSswRTMzCiFENCBVKzBFMzQKIUQ1IFUrMEUzNQohRDYgVSswRTM2CiFENyBVKzBFMzcKIUQ4IFUrMEUzOAohRDkgVSswRTM5CiFEQSBVKzBFM0EKIURGIFUrMEUzRgohRTAgVSswRTQwCiFFMSBVKzBFNDEKIUUyIFUrMEU0MgohRTMgVSswRTQzCiFFNCBVKzBFNDQKIUU1IFUrMEU0NQohRTYgVSswRTQ2CiFFNyBVKzBFNDcKIUU4IFUrMEU0OAohRTkgVSswRTQ5CiFFQSBVKzBFNEEKIUVCIFUrMEU0QgohRUMgVSswRTRDCiFFRCBVKzBFNEQKIUVFIFUrMEU0RQohRUYgVSswRTRGCiFGMCBVKzBFNTAKIUYxIFUrMEU1MQohRjIgVSswRTUyCiFGMyBVKzBFNTMKIUY0IFUrMEU1NAohRjUgVSswRTU1CiFGNiBVKzBFNTYKIUY3IFUrMEU1NwohRjggVSswRTU4CiFGOSBVKzBFNTkKIUZBIFUrMEU1QQohRkIgVSswRTVCCg=="),
    ("iso-8859-15", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzAwODAKITgxIFUrMDA4MQohODIgVSswMDgyCiE4MyBVKzAwODMKITg0IFUrMDA4NAohODUgVSswMDg1CiE4NiBVKzAwODYKITg3IFUrMDA4NwohODggVSswMDg4CiE4OSBVKzAwODkKIThBIFUrMDA4QQohOEIgVSswMDhCCiE4QyBVKzAwOEMKIThEIFUrMDA4RAohOEUgVSswMDhFCiE4RiBVKzAwOEYKITkwIFUrMDA5MAohOTEgVSswMDkxCiE5MiBVKzAwOTIKITkzIFUrMDA5MwohOTQgVSswMDk0CiE5NSBVKzAwOTUKITk2IFUrMDA5NgohOTcgVSswMDk3CiE5OCBVKzAwOTgKITk5IFUrMDA5OQohOUEgVSswMDlBCiE5QiBVKzAwOUIKITlDIFUrMDA5QwohOUQgVSswMDlECiE5RSBVKzAwOUUKITlGIFUrMDA5RgohQTAgVSswMEEwCiFBMSBVKzAwQTEKIUEyIFUrMDBBMgohQTMgVSswMEEzCiFBNCBVKzIwQUMKIUE1IFUrMDBBNQohQTYgVSswMTYwCiFBNyBVKzAwQTcKIUE4IFUrMDE2MQohQTkgVSswMEE5CiFBQSBVKzAwQUEKIUFCIFUrMDBBQgohQUMgVSswMEFDCiFBRCBVKzAwQUQKIUFFIFUrMDBBRQohQUYgVSswMEFGCiFCMCBVKzAwQjAKIUIxIFUrMDBCMQohQjIgVSswMEIyCiFCMyBVKzAwQjMKIUI0IFUrMDE3RAohQjUgVSswMEI1CiFCNiBVKzAwQjYKIUI3IFUrMDBCNwohQjggVSswMTdFCiFCOSBVKzAwQjkKIUJBIFUrMDBCQQohQkIgVSswMEJCCiFCQyBVKzAxNTIKIUJEIFUrMDE1MwohQkUgVSswMTc4CiFCRiBVKzAwQkYKIUMwIFUrMDBDMAohQzEgVSswMEMxCiFDMiBVKzAwQzIKIUMzIFUrMDBDMwohQzQgVSswMEM0CiFDNSBVKzAwQzUKIUM2IFUrMDBDNgohQzcgVSswMEM3CiFDOCBVKzAwQzgKIUM5IFUrMDBDOQohQ0EgVSswMENBCiFDQiBVKzAwQ0IKIUNDIFUrMDBDQwohQ0QgVSswMENECiFDRSBVKzAwQ0UKIUNGIFUrMDBDRgohRDAgVSswMEQwCiFEMSBVKzAwRDEKIUQyIFUrMDBEMgohRDMgVSswMEQzCiFENCBVKzAwRDQKIUQ1IFUrMDBENQohRDYgVSswMEQ2CiFENyBVKzAwRDcKIUQ4IFUrMDBEOAohRDkgVSswMEQ5CiFEQSBVKzAwREEKIURCIFUrMDBEQgohREMgVSswMERDCiFERCBVKzAwREQKIURFIFUrMDBERQohREYgVSswMERGCiFFMCBVKzAwRTAKIUUxIFUrMDBFMQohRTIgVSswMEUyCiFFMyBVKzAwRTMKIUU0IFUrMDBFNAohRTUgVSswMEU1CiFFNiBVKzAwRTYKIUU3IFUrMDBFNwohRTggVSswMEU4CiFFOSBVKzAwRTkKIUVBIFUrMDBFQQohRUIgVSswMEVCCiFFQyBVKzAwRUMKIUVEIFUrMDBFRAohRUUgVSswMEVFCiFFRiBVKzAwRUYKIUYwIFUrMDBGMAohRjEgVSswMEYxCiFGMiBVKzAwRjIKIUYzIFUrMDBGMwohRjQgVSswMEY0CiFGNSBVKzAwRjUKIUY2IFUrMDBGNgohRjcgVSswMEY3CiFGOCBVKzAwRjgKIUY5IFUrMDBGOQohRkEgVSswMEZBCiFGQiBVKzAwRkIKIUZDIFUrMDBGQwohRkQgVSswMEZECiFGRSBVKzAwRkUKIUZGIFUrMDBGRgo="),
    ("iso-8859-16", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzAwODAKITgxIFUrMDA4MQohODIgVSswMDgyCiE4MyBVKzAwODMKITg0IFUrMDA4NAohODUgVSswMDg1CiE4NiBVKzAwODYKITg3IFUrMDA4NwohODggVSswMDg4CiE4OSBVKzAwODkKIThBIFUrMDA4QQohOEIgVSswMDhCCiE4QyBVKzAwOEMKIThEIFUrMDA4RAohOEUgVSswMDhFCiE4RiBVKzAwOEYKITkwIFUrMDA5MAohOTEgVSswMDkxCiE5MiBVKzAwOTIKITkzIFUrMDA5MwohOTQgVSswMDk0CiE5NSBVKzAwOTUKITk2IFUrMDA5NgohOTcgVSswMDk3CiE5OCBVKzAwOTgKITk5IFUrMDA5OQohOUEgVSswMDlBCiE5QiBVKzAwOUIKITlDIFUrMDA5QwohOUQgVSswMDlECiE5RSBVKzAwOUUKITlGIFUrMDA5RgohQTAgVSswMEEwCiFBMSBVKzAxMDQKIUEyIFUrMDEwNQohQTMgVSswMTQxCiFBNCBVKzIwQUMKIUE1IFUrMjAxRQohQTYgVSswMTYwCiFBNyBVKzAwQTcKIUE4IFUrMDE2MQohQTkgVSswMEE5CiFBQSBVKzAyMTgKIUFCIFUrMDBBQgohQUMgVSswMTc5CiFBRCBVKzAwQUQKIUFFIFUrMDE3QQohQUYgVSswMTdCCiFCMCBVKzAwQjAKIUIxIFUrMDBCMQohQjIgVSswMTBDCiFCMyBVKzAxNDIKIUI0IFUrMDE3RAohQjUgVSsyMDFECiFCNiBVKzAwQjYKIUI3IFUrMDBCNwohQjggVSswMTdFCiFCOSBVKzAxMEQKIUJBIFUrMDIxOQohQkIgVSswMEJCCiFCQyBVKzAxNTIKIUJEIFUrMDE1MwohQkUgVSswMTc4CiFCRiBVKzAxN0MKIUMwIFUrMDBDMAohQzEgVSswMEMxCiFDMiBVKzAwQzIKIUMzIFUrMDEwMgohQzQgVSswMEM0CiFDNSBVKzAxMDYKIUM2IFUrMDBDNgohQzcgVSswMEM3CiFDOCBVKzAwQzgKIUM5IFUrMDBDOQohQ0EgVSswMENBCiFDQiBVKzAwQ0IKIUNDIFUrMDBDQwohQ0QgVSswMENECiFDRSBVKzAwQ0UKIUNGIFUrMDBDRgohRDAgVSswMTEwCiFEMSBVKzAxNDMKIUQyIFUrMDBEMgohRDMgVSswMEQzCiFENCBVKzAwRDQKIUQ1IFUrMDE1MAohRDYgVSswMEQ2CiFENyBVKzAxNUEKIUQ4IFUrMDE3MAohRDkgVSswMEQ5CiFEQSBVKzAwREEKIURCIFUrMDBEQgohREMgVSswMERDCiFERCBVKzAxMTgKIURFIFUrMDIxQQohREYgVSswMERGCiFFMCBVKzAwRTAKIUUxIFUrMDBFMQohRTIgVSswMEUyCiFFMyBVKzAxMDMKIUU0IFUrMDBFNAohRTUgVSswMTA3CiFFNiBVKzAwRTYKIUU3IFUrMDBFNwohRTggVSswMEU4CiFFOSBVKzAwRTkKIUVBIFUrMDBFQQohRUIgVSswMEVCCiFFQyBVKzAwRUMKIUVEIFUrMDBFRAohRUUgVSswMEVFCiFFRiBVKzAwRUYKIUYwIFUrMDExMQohRjEgVSswMTQ0CiFGMiBVKzAwRjIKIUYzIFUrMDBGMwohRjQgVSswMEY0CiFGNSBVKzAxNTEKIUY2IFUrMDBGNgohRjcgVSswMTVCCiFGOCBVKzAxNzEKIUY5IFUrMDBGOQohRkEgVSswMEZBCiFGQiBVKzAwRkIKIUZDIFUrMDBGQwohRkQgVSswMTE5CiFGRSBVKzAyMUIKIUZGIFUrMDBGRgo="),
    ("iso-8859-2", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzAwODAKITgxIFUrMDA4MQohODIgVSswMDgyCiE4MyBVKzAwODMKITg0IFUrMDA4NAohODUgVSswMDg1CiE4NiBVKzAwODYKITg3IFUrMDA4NwohODggVSswMDg4CiE4OSBVKzAwODkKIThBIFUrMDA4QQohOEIgVSswMDhCCiE4QyBVKzAwOEMKIThEIFUrMDA4RAohOEUgVSswMDhFCiE4RiBVKzAwOEYKITkwIFUrMDA5MAohOTEgVSswMDkxCiE5MiBVKzAwOTIKITkzIFUrMDA5MwohOTQgVSswMDk0CiE5NSBVKzAwOTUKITk2IFUrMDA5NgohOTcgVSswMDk3CiE5OCBVKzAwOTgKITk5IFUrMDA5OQohOUEgVSswMDlBCiE5QiBVKzAwOUIKITlDIFUrMDA5QwohOUQgVSswMDlECiE5RSBVKzAwOUUKITlGIFUrMDA5RgohQTAgVSswMEEwCiFBMSBVKzAxMDQKIUEyIFUrMDJEOAohQTMgVSswMTQxCiFBNCBVKzAwQTQKIUE1IFUrMDEzRAohQTYgVSswMTVBCiFBNyBVKzAwQTcKIUE4IFUrMDBBOAohQTkgVSswMTYwCiFBQSBVKzAxNUUKIUFCIFUrMDE2NAohQUMgVSswMTc5CiFBRCBVKzAwQUQKIUFFIFUrMDE3RAohQUYgVSswMTdCCiFCMCBVKzAwQjAKIUIxIFUrMDEwNQohQjIgVSswMkRCCiFCMyBVKzAxNDIKIUI0IFUrMDBCNAohQjUgVSswMTNFCiFCNiBVKzAxNUIKIUI3IFUrMDJDNwohQjggVSswMEI4CiFCOSBVKzAxNjEKIUJBIFUrMDE1RgohQkIgVSswMTY1CiFCQyBVKzAxN0EKIUJEIFUrMDJERAohQkUgVSswMTdFCiFCRiBVKzAxN0MKIUMwIFUrMDE1NAohQzEgVSswMEMxCiFDMiBVKzAwQzIKIUMzIFUrMDEwMgohQzQgVSswMEM0CiFDNSBVKzAxMzkKIUM2IFUrMDEwNgohQzcgVSswMEM3CiFDOCBVKzAxMEMKIUM5IFUrMDBDOQohQ0EgVSswMTE4CiFDQiBVKzAwQ0IKIUNDIFUrMDExQQohQ0QgVSswMENECiFDRSBVKzAwQ0UKIUNGIFUrMDEwRQohRDAgVSswMTEwCiFEMSBVKzAxNDMKIUQyIFUrMDE0NwohRDMgVSswMEQzCiFENCBVKzAwRDQKIUQ1IFUrMDE1MAohRDYgVSswMEQ2CiFENyBVKzAwRDcKIUQ4IFUrMDE1OAohRDkgVSswMTZFCiFEQSBVKzAwREEKIURCIFUrMDE3MAohREMgVSswMERDCiFERCBVKzAwREQKIURFIFUrMDE2MgohREYgVSswMERGCiFFMCBVKzAxNTUKIUUxIFUrMDBFMQohRTIgVSswMEUyCiFFMyBVKzAxMDMKIUU0IFUrMDBFNAohRTUgVSswMTNBCiFFNiBVKzAxMDcKIUU3IFUrMDBFNwohRTggVSswMTBECiFFOSBVKzAwRTkKIUVBIFUrMDExOQohRUIgVSswMEVCCiFFQyBVKzAxMUIKIUVEIFUrMDBFRAohRUUgVSswMEVFCiFFRiBVKzAxMEYKIUYwIFUrMDExMQohRjEgVSswMTQ0CiFGMiBVKzAxNDgKIUYzIFUrMDBGMwohRjQgVSswMEY0CiFGNSBVKzAxNTEKIUY2IFUrMDBGNgohRjcgVSswMEY3CiFGOCBVKzAxNTkKIUY5IFUrMDE2RgohRkEgVSswMEZBCiFGQiBVKzAxNzEKIUZDIFUrMDBGQwohRkQgVSswMEZECiFGRSBVKzAxNjMKIUZGIFUrMDJEOQo="),
    ("iso-8859-4", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzAwODAKITgxIFUrMDA4MQohODIgVSswMDgyCiE4MyBVKzAwODMKITg0IFUrMDA4NAohODUgVSswMDg1CiE4NiBVKzAwODYKITg3IFUrMDA4NwohODggVSswMDg4CiE4OSBVKzAwODkKIThBIFUrMDA4QQohOEIgVSswMDhCCiE4QyBVKzAwOEMKIThEIFUrMDA4RAohOEUgVSswMDhFCiE4RiBVKzAwOEYKITkwIFUrMDA5MAohOTEgVSswMDkxCiE5MiBVKzAwOTIKITkzIFUrMDA5MwohOTQgVSswMDk0CiE5NSBVKzAwOTUKITk2IFUrMDA5NgohOTcgVSswMDk3CiE5OCBVKzAwOTgKITk5IFUrMDA5OQohOUEgVSswMDlBCiE5QiBVKzAwOUIKITlDIFUrMDA5QwohOUQgVSswMDlECiE5RSBVKzAwOUUKITlGIFUrMDA5RgohQTAgVSswMEEwCiFBMSBVKzAxMDQKIUEyIFUrMDEzOAohQTMgVSswMTU2CiFBNCBVKzAwQTQKIUE1IFUrMDEyOAohQTYgVSswMTNCCiFBNyBVKzAwQTcKIUE4IFUrMDBBOAohQTkgVSswMTYwCiFBQSBVKzAxMTIKIUFCIFUrMDEyMgohQUMgVSswMTY2CiFBRCBVKzAwQUQKIUFFIFUrMDE3RAohQUYgVSswMEFGCiFCMCBVKzAwQjAKIUIxIFUrMDEwNQohQjIgVSswMkRCCiFCMyBVKzAxNTcKIUI0IFUrMDBCNAohQjUgVSswMTI5CiFCNiBVKzAxM0MKIUI3IFUrMDJDNwohQjggVSswMEI4CiFCOSBVKzAxNjEKIUJBIFUrMDExMwohQkIgVSswMTIzCiFCQyBVKzAxNjcKIUJEIFUrMDE0QQohQkUgVSswMTdFCiFCRiBVKzAxNEIKIUMwIFUrMDEwMAohQzEgVSswMEMxCiFDMiBVKzAwQzIKIUMzIFUrMDBDMwohQzQgVSswMEM0CiFDNSBVKzAwQzUKIUM2IFUrMDBDNgohQzcgVSswMTJFCiFDOCBVKzAxMEMKIUM5IFUrMDBDOQohQ0EgVSswMTE4CiFDQiBVKzAwQ0IKIUNDIFUrMDExNgohQ0QgVSswMENECiFDRSBVKzAwQ0UKIUNGIFUrMDEyQQohRDAgVSswMTEwCiFEMSBVKzAxNDUKIUQyIFUrMDE0QwohRDMgVSswMTM2CiFENCBVKzAwRDQKIUQ1IFUrMDBENQohRDYgVSswMEQ2CiFENyBVKzAwRDcKIUQ4IFUrMDBEOAohRDkgVSswMTcyCiFEQSBVKzAwREEKIURCIFUrMDBEQgohREMgVSswMERDCiFERCBVKzAxNjgKIURFIFUrMDE2QQohREYgVSswMERGCiFFMCBVKzAxMDEKIUUxIFUrMDBFMQohRTIgVSswMEUyCiFFMyBVKzAwRTMKIUU0IFUrMDBFNAohRTUgVSswMEU1CiFFNiBVKzAwRTYKIUU3IFUrMDEyRgohRTggVSswMTBECiFFOSBVKzAwRTkKIUVBIFUrMDExOQohRUIgVSswMEVCCiFFQyBVKzAxMTcKIUVEIFUrMDBFRAohRUUgVSswMEVFCiFFRiBVKzAxMkIKIUYwIFUrMDExMQohRjEgVSswMTQ2CiFGMiBVKzAxNEQKIUYzIFUrMDEzNwohRjQgVSswMEY0CiFGNSBVKzAwRjUKIUY2IFUrMDBGNgohRjcgVSswMEY3CiFGOCBVKzAwRjgKIUY5IFUrMDE3MwohRkEgVSswMEZBCiFGQiBVKzAwRkIKIUZDIFUrMDBGQwohRkQgVSswMTY5CiFGRSBVKzAxNkIKIUZGIFUrMDJEOQo="),
    ("iso-8859-5", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzAwODAKITgxIFUrMDA4MQohODIgVSswMDgyCiE4MyBVKzAwODMKITg0IFUrMDA4NAohODUgVSswMDg1CiE4NiBVKzAwODYKITg3IFUrMDA4NwohODggVSswMDg4CiE4OSBVKzAwODkKIThBIFUrMDA4QQohOEIgVSswMDhCCiE4QyBVKzAwOEMKIThEIFUrMDA4RAohOEUgVSswMDhFCiE4RiBVKzAwOEYKITkwIFUrMDA5MAohOTEgVSswMDkxCiE5MiBVKzAwOTIKITkzIFUrMDA5MwohOTQgVSswMDk0CiE5NSBVKzAwOTUKITk2IFUrMDA5NgohOTcgVSswMDk3CiE5OCBVKzAwOTgKITk5IFUrMDA5OQohOUEgVSswMDlBCiE5QiBVKzAwOUIKITlDIFUrMDA5QwohOUQgVSswMDlECiE5RSBVKzAwOUUKITlGIFUrMDA5RgohQTAgVSswMEEwCiFBMSBVKzA0MDEKIUEyIFUrMDQwMgohQTMgVSswNDAzCiFBNCBVKzA0MDQKIUE1IFUrMDQwNQohQTYgVSswNDA2CiFBNyBVKzA0MDcKIUE4IFUrMDQwOAohQTkgVSswNDA5CiFBQSBVKzA0MEEKIUFCIFUrMDQwQgohQUMgVSswNDBDCiFBRCBVKzAwQUQKIUFFIFUrMDQwRQohQUYgVSswNDBGCiFCMCBVKzA0MTAKIUIxIFUrMDQxMQohQjIgVSswNDEyCiFCMyBVKzA0MTMKIUI0IFUrMDQxNAohQjUgVSswNDE1CiFCNiBVKzA0MTYKIUI3IFUrMDQxNwohQjggVSswNDE4CiFCOSBVKzA0MTkKIUJBIFUrMDQxQQohQkIgVSswNDFCCiFCQyBVKzA0MUMKIUJEIFUrMDQxRAohQkUgVSswNDFFCiFCRiBVKzA0MUYKIUMwIFUrMDQyMAohQzEgVSswNDIxCiFDMiBVKzA0MjIKIUMzIFUrMDQyMwohQzQgVSswNDI0CiFDNSBVKzA0MjUKIUM2IFUrMDQyNgohQzcgVSswNDI3CiFDOCBVKzA0MjgKIUM5IFUrMDQyOQohQ0EgVSswNDJBCiFDQiBVKzA0MkIKIUNDIFUrMDQyQwohQ0QgVSswNDJECiFDRSBVKzA0MkUKIUNGIFUrMDQyRgohRDAgVSswNDMwCiFEMSBVKzA0MzEKIUQyIFUrMDQzMgohRDMgVSswNDMzCiFENCBVKzA0MzQKIUQ1IFUrMDQzNQohRDYgVSswNDM2CiFENyBVKzA0MzcKIUQ4IFUrMDQzOAohRDkgVSswNDM5CiFEQSBVKzA0M0EKIURCIFUrMDQzQgohREMgVSswNDNDCiFERCBVKzA0M0QKIURFIFUrMDQzRQohREYgVSswNDNGCiFFMCBVKzA0NDAKIUUxIFUrMDQ0MQohRTIgVSswNDQyCiFFMyBVKzA0NDMKIUU0IFUrMDQ0NAohRTUgVSswNDQ1CiFFNiBVKzA0NDYKIUU3IFUrMDQ0NwohRTggVSswNDQ4CiFFOSBVKzA0NDkKIUVBIFUrMDQ0QQohRUIgVSswNDRCCiFFQyBVKzA0NEMKIUVEIFUrMDQ0RAohRUUgVSswNDRFCiFFRiBVKzA0NEYKIUYwIFUrMjExNgohRjEgVSswNDUxCiFGMiBVKzA0NTIKIUYzIFUrMDQ1MwohRjQgVSswNDU0CiFGNSBVKzA0NTUKIUY2IFUrMDQ1NgohRjcgVSswNDU3CiFGOCBVKzA0NTgKIUY5IFUrMDQ1OQohRkEgVSswNDVBCiFGQiBVKzA0NUIKIUZDIFUrMDQ1QwohRkQgVSswMEE3CiFGRSBVKzA0NUUKIUZGIFUrMDQ1Rgo="),
    ("iso-8859-7", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzAwODAKITgxIFUrMDA4MQohODIgVSswMDgyCiE4MyBVKzAwODMKITg0IFUrMDA4NAohODUgVSswMDg1CiE4NiBVKzAwODYKITg3IFUrMDA4NwohODggVSswMDg4CiE4OSBVKzAwODkKIThBIFUrMDA4QQohOEIgVSswMDhCCiE4QyBVKzAwOEMKIThEIFUrMDA4RAohOEUgVSswMDhFCiE4RiBVKzAwOEYKITkwIFUrMDA5MAohOTEgVSswMDkxCiE5MiBVKzAwOTIKITkzIFUrMDA5MwohOTQgVSswMDk0CiE5NSBVKzAwOTUKITk2IFUrMDA5NgohOTcgVSswMDk3CiE5OCBVKzAwOTgKITk5IFUrMDA5OQohOUEgVSswMDlBCiE5QiBVKzAwOUIKITlDIFUrMDA5QwohOUQgVSswMDlECiE5RSBVKzAwOUUKITlGIFUrMDA5RgohQTAgVSswMEEwCiFBMSBVKzIwMTgKIUEyIFUrMjAxOQohQTMgVSswMEEzCiFBNCBVKzIwQUMKIUE1IFUrMjBBRgohQTYgVSswMEE2CiFBNyBVKzAwQTcKIUE4IFUrMDBBOAohQTkgVSswMEE5CiFBQSBVKzAzN0EKIUFCIFUrMDBBQgohQUMgVSswMEFDCiFBRCBVKzAwQUQKIUFGIFUrMjAxNQohQjAgVSswMEIwCiFCMSBVKzAwQjEKIUIyIFUrMDBCMgohQjMgVSswMEIzCiFCNCBVKzAzODQKIUI1IFUrMDM4NQohQjYgVSswMzg2CiFCNyBVKzAwQjcKIUI4IFUrMDM4OAohQjkgVSswMzg5CiFCQSBVKzAzOEEKIUJCIFUrMDBCQgohQkMgVSswMzhDCiFCRCBVKzAwQkQKIUJFIFUrMDM4RQohQkYgVSswMzhGCiFDMCBVKzAzOTAKIUMxIFUrMDM5MQohQzIgVSswMzkyCiFDMyBVKzAzOTMKIUM0IFUrMDM5NAohQzUgVSswMzk1CiFDNiBVKzAzOTYKIUM3IFUrMDM5NwohQzggVSswMzk4CiFDOSBVKzAzOTkKIUNBIFUrMDM5QQohQ0IgVSswMzlCCiFDQyBVKzAzOUMKIUNEIFUrMDM5RAohQ0UgVSswMzlFCiFDRiBVKzAzOUYKIUQwIFUrMDNBMAohRDEgVSswM0ExCiFEMyBVKzAzQTMKIUQ0IFUrMDNBNAohRDUgVSswM0E1CiFENiBVKzAzQTYKIUQ3IFUrMDNBNwohRDggVSswM0E4CiFEOSBVKzAzQTkKIURBIFUrMDNBQQohREIgVSswM0FCCiFEQyBVKzAzQUMKIUREIFUrMDNBRAohREUgVSswM0FFCiFERiBVKzAzQUYKIUUwIFUrMDNCMAohRTEgVSswM0IxCiFFMiBVKzAzQjIKIUUzIFUrMDNCMwohRTQgVSswM0I0CiFFNSBVKzAzQjUKIUU2IFUrMDNCNgohRTcgVSswM0I3CiFFOCBVKzAzQjgKIUU5IFUrMDNCOQohRUEgVSswM0JBCiFFQiBVKzAzQkIKIUVDIFUrMDNCQwohRUQgVSswM0JECiFFRSBVKzAzQkUKIUVGIFUrMDNCRgohRjAgVSswM0MwCiFGMSBVKzAzQzEKIUYyIFUrMDNDMgohRjMgVSswM0MzCiFGNCBVKzAzQzQKIUY1IFUrMDNDNQohRjYgVSswM0M2CiFGNyBVKzAzQzcKIUY4IFUrMDNDOAohRjkgVSswM0M5CiFGQSBVKzAzQ0EKIUZCIFUrMDNDQgohRkMgVSswM0NDCiFGRCBVKzAzQ0QKIUZFIFUrMDNDRQo="),
    ("iso-8859-9", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzAwODAKITgxIFUrMDA4MQohODIgVSswMDgyCiE4MyBVKzAwODMKITg0IFUrMDA4NAohODUgVSswMDg1CiE4NiBVKzAwODYKITg3IFUrMDA4NwohODggVSswMDg4CiE4OSBVKzAwODkKIThBIFUrMDA4QQohOEIgVSswMDhCCiE4QyBVKzAwOEMKIThEIFUrMDA4RAohOEUgVSswMDhFCiE4RiBVKzAwOEYKITkwIFUrMDA5MAohOTEgVSswMDkxCiE5MiBVKzAwOTIKITkzIFUrMDA5MwohOTQgVSswMDk0CiE5NSBVKzAwOTUKITk2IFUrMDA5NgohOTcgVSswMDk3CiE5OCBVKzAwOTgKITk5IFUrMDA5OQohOUEgVSswMDlBCiE5QiBVKzAwOUIKITlDIFUrMDA5QwohOUQgVSswMDlECiE5RSBVKzAwOUUKITlGIFUrMDA5RgohQTAgVSswMEEwCiFBMSBVKzAwQTEKIUEyIFUrMDBBMgohQTMgVSswMEEzCiFBNCBVKzAwQTQKIUE1IFUrMDBBNQohQTYgVSswMEE2CiFBNyBVKzAwQTcKIUE4IFUrMDBBOAohQTkgVSswMEE5CiFBQSBVKzAwQUEKIUFCIFUrMDBBQgohQUMgVSswMEFDCiFBRCBVKzAwQUQKIUFFIFUrMDBBRQohQUYgVSswMEFGCiFCMCBVKzAwQjAKIUIxIFUrMDBCMQohQjIgVSswMEIyCiFCMyBVKzAwQjMKIUI0IFUrMDBCNAohQjUgVSswMEI1CiFCNiBVKzAwQjYKIUI3IFUrMDBCNwohQjggVSswMEI4CiFCOSBVKzAwQjkKIUJBIFUrMDBCQQohQkIgVSswMEJCCiFCQyBVKzAwQkMKIUJEIFUrMDBCRAohQkUgVSswMEJFCiFCRiBVKzAwQkYKIUMwIFUrMDBDMAohQzEgVSswMEMxCiFDMiBVKzAwQzIKIUMzIFUrMDBDMwohQzQgVSswMEM0CiFDNSBVKzAwQzUKIUM2IFUrMDBDNgohQzcgVSswMEM3CiFDOCBVKzAwQzgKIUM5IFUrMDBDOQohQ0EgVSswMENBCiFDQiBVKzAwQ0IKIUNDIFUrMDBDQwohQ0QgVSswMENECiFDRSBVKzAwQ0UKIUNGIFUrMDBDRgohRDAgVSswMTFFCiFEMSBVKzAwRDEKIUQyIFUrMDBEMgohRDMgVSswMEQzCiFENCBVKzAwRDQKIUQ1IFUrMDBENQohRDYgVSswMEQ2CiFENyBVKzAwRDcKIUQ4IFUrMDBEOAohRDkgVSswMEQ5CiFEQSBVKzAwREEKIURCIFUrMDBEQgohREMgVSswMERDCiFERCBVKzAxMzAKIURFIFUrMDE1RQohREYgVSswMERGCiFFMCBVKzAwRTAKIUUxIFUrMDBFMQohRTIgVSswMEUyCiFFMyBVKzAwRTMKIUU0IFUrMDBFNAohRTUgVSswMEU1CiFFNiBVKzAwRTYKIUU3IFUrMDBFNwohRTggVSswMEU4CiFFOSBVKzAwRTkKIUVBIFUrMDBFQQohRUIgVSswMEVCCiFFQyBVKzAwRUMKIUVEIFUrMDBFRAohRUUgVSswMEVFCiFFRiBVKzAwRUYKIUYwIFUrMDExRgohRjEgVSswMEYxCiFGMiBVKzAwRjIKIUYzIFUrMDBGMwohRjQgVSswMEY0CiFGNSBVKzAwRjUKIUY2IFUrMDBGNgohRjcgVSswMEY3CiFGOCBVKzAwRjgKIUY5IFUrMDBGOQohRkEgVSswMEZBCiFGQiBVKzAwRkIKIUZDIFUrMDBGQwohRkQgVSswMTMxCiFGRSBVKzAxNUYKIUZGIFUrMDBGRgo="),
    ("koi8-r", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzI1MDAKITgxIFUrMjUwMgohODIgVSsyNTBDCiE4MyBVKzI1MTAKITg0IFUrMjUxNAohODUgVSsyNTE4CiE4NiBVKzI1MUMKITg3IFUrMjUyNAohODggVSsyNTJDCiE4OSBVKzI1MzQKIThBIFUrMjUzQwohOEIgVSsyNTgwCiE4QyBVKzI1ODQKIThEIFUrMjU4OAohOEUgVSsyNThDCiE4RiBVKzI1OTAKITkwIFUrMjU5MQohOTEgVSsyNTkyCiE5MiBVKzI1OTMKITkzIFUrMjMyMAohOTQgVSsyNUEwCiE5NSBVKzIyMTkKITk2IFUrMjIxQQohOTcgVSsyMjQ4CiE5OCBVKzIyNjQKITk5IFUrMjI2NQohOUEgVSswMEEwCiE5QiBVKzIzMjEKITlDIFUrMDBCMAohOUQgVSswMEIyCiE5RSBVKzAwQjcKITlGIFUrMDBGNwohQTAgVSsyNTUwCiFBMSBVKzI1NTEKIUEyIFUrMjU1MgohQTMgVSswNDUxCiFBNCBVKzI1NTMKIUE1IFUrMjU1NAohQTYgVSsyNTU1CiFBNyBVKzI1NTYKIUE4IFUrMjU1NwohQTkgVSsyNTU4CiFBQSBVKzI1NTkKIUFCIFUrMjU1QQohQUMgVSsyNTVCCiFBRCBVKzI1NUMKIUFFIFUrMjU1RAohQUYgVSsyNTVFCiFCMCBVKzI1NUYKIUIxIFUrMjU2MAohQjIgVSsyNTYxCiFCMyBVKzA0MDEKIUI0IFUrMjU2MgohQjUgVSsyNTYzCiFCNiBVKzI1NjQKIUI3IFUrMjU2NQohQjggVSsyNTY2CiFCOSBVKzI1NjcKIUJBIFUrMjU2OAohQkIgVSsyNTY5CiFCQyBVKzI1NkEKIUJEIFUrMjU2QgohQkUgVSsyNTZDCiFCRiBVKzAwQTkKIUMwIFUrMDQ0RQohQzEgVSswNDMwCiFDMiBVKzA0MzEKIUMzIFUrMDQ0NgohQzQgVSswNDM0CiFDNSBVKzA0MzUKIUM2IFUrMDQ0NAohQzcgVSswNDMzCiFDOCBVKzA0NDUKIUM5IFUrMDQzOAohQ0EgVSswNDM5CiFDQiBVKzA0M0EKIUNDIFUrMDQzQgohQ0QgVSswNDNDCiFDRSBVKzA0M0QKIUNGIFUrMDQzRQohRDAgVSswNDNGCiFEMSBVKzA0NEYKIUQyIFUrMDQ0MAohRDMgVSswNDQxCiFENCBVKzA0NDIKIUQ1IFUrMDQ0MwohRDYgVSswNDM2CiFENyBVKzA0MzIKIUQ4IFUrMDQ0QwohRDkgVSswNDRCCiFEQSBVKzA0MzcKIURCIFUrMDQ0OAohREMgVSswNDRECiFERCBVKzA0NDkKIURFIFUrMDQ0NwohREYgVSswNDRBCiFFMCBVKzA0MkUKIUUxIFUrMDQxMAohRTIgVSswNDExCiFFMyBVKzA0MjYKIUU0IFUrMDQxNAohRTUgVSswNDE1CiFFNiBVKzA0MjQKIUU3IFUrMDQxMwohRTggVSswNDI1CiFFOSBVKzA0MTgKIUVBIFUrMDQxOQohRUIgVSswNDFBCiFFQyBVKzA0MUIKIUVEIFUrMDQxQwohRUUgVSswNDFECiFFRiBVKzA0MUUKIUYwIFUrMDQxRgohRjEgVSswNDJGCiFGMiBVKzA0MjAKIUYzIFUrMDQyMQohRjQgVSswNDIyCiFGNSBVKzA0MjMKIUY2IFUrMDQxNgohRjcgVSswNDEyCiFGOCBVKzA0MkMKIUY5IFUrMDQyQgohRkEgVSswNDE3CiFGQiBVKzA0MjgKIUZDIFUrMDQyRAohRkQgVSswNDI5CiFGRSBVKzA0MjcKIUZGIFUrMDQyQQo="),
    ("koi8-u", "ITAwIFUrMDAwMAohMDEgVSswMDAxCiEwMiBVKzAwMDIKITAzIFUrMDAwMwohMDQgVSswMDA0CiEwNSBVKzAwMDUKITA2IFUrMDAwNgohMDcgVSswMDA3CiEwOCBVKzAwMDgKITA5IFUrMDAwOQohMEEgVSswMDBBCiEwQiBVKzAwMEIKITBDIFUrMDAwQwohMEQgVSswMDBECiEwRSBVKzAwMEUKITBGIFUrMDAwRgohMTAgVSswMDEwCiExMSBVKzAwMTEKITEyIFUrMDAxMgohMTMgVSswMDEzCiExNCBVKzAwMTQKITE1IFUrMDAxNQohMTYgVSswMDE2CiExNyBVKzAwMTcKITE4IFUrMDAxOAohMTkgVSswMDE5CiExQSBVKzAwMUEKITFCIFUrMDAxQgohMUMgVSswMDFDCiExRCBVKzAwMUQKITFFIFUrMDAxRQohMUYgVSswMDFGCiEyMCBVKzAwMjAKITIxIFUrMDAyMQohMjIgVSswMDIyCiEyMyBVKzAwMjMKITI0IFUrMDAyNAohMjUgVSswMDI1CiEyNiBVKzAwMjYKITI3IFUrMDAyNwohMjggVSswMDI4CiEyOSBVKzAwMjkKITJBIFUrMDAyQQohMkIgVSswMDJCCiEyQyBVKzAwMkMKITJEIFUrMDAyRAohMkUgVSswMDJFCiEyRiBVKzAwMkYKITMwIFUrMDAzMAohMzEgVSswMDMxCiEzMiBVKzAwMzIKITMzIFUrMDAzMwohMzQgVSswMDM0CiEzNSBVKzAwMzUKITM2IFUrMDAzNgohMzcgVSswMDM3CiEzOCBVKzAwMzgKITM5IFUrMDAzOQohM0EgVSswMDNBCiEzQiBVKzAwM0IKITNDIFUrMDAzQwohM0QgVSswMDNECiEzRSBVKzAwM0UKITNGIFUrMDAzRgohNDAgVSswMDQwCiE0MSBVKzAwNDEKITQyIFUrMDA0MgohNDMgVSswMDQzCiE0NCBVKzAwNDQKITQ1IFUrMDA0NQohNDYgVSswMDQ2CiE0NyBVKzAwNDcKITQ4IFUrMDA0OAohNDkgVSswMDQ5CiE0QSBVKzAwNEEKITRCIFUrMDA0QgohNEMgVSswMDRDCiE0RCBVKzAwNEQKITRFIFUrMDA0RQohNEYgVSswMDRGCiE1MCBVKzAwNTAKITUxIFUrMDA1MQohNTIgVSswMDUyCiE1MyBVKzAwNTMKITU0IFUrMDA1NAohNTUgVSswMDU1CiE1NiBVKzAwNTYKITU3IFUrMDA1NwohNTggVSswMDU4CiE1OSBVKzAwNTkKITVBIFUrMDA1QQohNUIgVSswMDVCCiE1QyBVKzAwNUMKITVEIFUrMDA1RAohNUUgVSswMDVFCiE1RiBVKzAwNUYKITYwIFUrMDA2MAohNjEgVSswMDYxCiE2MiBVKzAwNjIKITYzIFUrMDA2MwohNjQgVSswMDY0CiE2NSBVKzAwNjUKITY2IFUrMDA2NgohNjcgVSswMDY3CiE2OCBVKzAwNjgKITY5IFUrMDA2OQohNkEgVSswMDZBCiE2QiBVKzAwNkIKITZDIFUrMDA2QwohNkQgVSswMDZECiE2RSBVKzAwNkUKITZGIFUrMDA2RgohNzAgVSswMDcwCiE3MSBVKzAwNzEKITcyIFUrMDA3MgohNzMgVSswMDczCiE3NCBVKzAwNzQKITc1IFUrMDA3NQohNzYgVSswMDc2CiE3NyBVKzAwNzcKITc4IFUrMDA3OAohNzkgVSswMDc5CiE3QSBVKzAwN0EKITdCIFUrMDA3QgohN0MgVSswMDdDCiE3RCBVKzAwN0QKITdFIFUrMDA3RQohN0YgVSswMDdGCiE4MCBVKzI1MDAKITgxIFUrMjUwMgohODIgVSsyNTBDCiE4MyBVKzI1MTAKITg0IFUrMjUxNAohODUgVSsyNTE4CiE4NiBVKzI1MUMKITg3IFUrMjUyNAohODggVSsyNTJDCiE4OSBVKzI1MzQKIThBIFUrMjUzQwohOEIgVSsyNTgwCiE4QyBVKzI1ODQKIThEIFUrMjU4OAohOEUgVSsyNThDCiE4RiBVKzI1OTAKITkwIFUrMjU5MQohOTEgVSsyNTkyCiE5MiBVKzI1OTMKITkzIFUrMjMyMAohOTQgVSsyNUEwCiE5NSBVKzIyMTkKITk2IFUrMjIxQQohOTcgVSsyMjQ4CiE5OCBVKzIyNjQKITk5IFUrMjI2NQohOUEgVSswMEEwCiE5QiBVKzIzMjEKITlDIFUrMDBCMAohOUQgVSswMEIyCiE5RSBVKzAwQjcKITlGIFUrMDBGNwohQTAgVSsyNTUwCiFBMSBVKzI1NTEKIUEyIFUrMjU1MgohQTMgVSswNDUxCiFBNCBVKzA0NTQKIUE1IFUrMjU1NAohQTYgVSswNDU2CiFBNyBVKzA0NTcKIUE4IFUrMjU1NwohQTkgVSsyNTU4CiFBQSBVKzI1NTkKIUFCIFUrMjU1QQohQUMgVSsyNTVCCiFBRCBVKzA0OTEKIUFFIFUrMjU1RAohQUYgVSsyNTVFCiFCMCBVKzI1NUYKIUIxIFUrMjU2MAohQjIgVSsyNTYxCiFCMyBVKzA0MDEKIUI0IFUrMDQwNAohQjUgVSsyNTYzCiFCNiBVKzA0MDYKIUI3IFUrMDQwNwohQjggVSsyNTY2CiFCOSBVKzI1NjcKIUJBIFUrMjU2OAohQkIgVSsyNTY5CiFCQyBVKzI1NkEKIUJEIFUrMDQ5MAohQkUgVSsyNTZDCiFCRiBVKzAwQTkKIUMwIFUrMDQ0RQohQzEgVSswNDMwCiFDMiBVKzA0MzEKIUMzIFUrMDQ0NgohQzQgVSswNDM0CiFDNSBVKzA0MzUKIUM2IFUrMDQ0NAohQzcgVSswNDMzCiFDOCBVKzA0NDUKIUM5IFUrMDQzOAohQ0EgVSswNDM5CiFDQiBVKzA0M0EKIUNDIFUrMDQzQgohQ0QgVSswNDNDCiFDRSBVKzA0M0QKIUNGIFUrMDQzRQohRDAgVSswNDNGCiFEMSBVKzA0NEYKIUQyIFUrMDQ0MAohRDMgVSswNDQxCiFENCBVKzA0NDIKIUQ1IFUrMDQ0MwohRDYgVSswNDM2CiFENyBVKzA0MzIKIUQ4IFUrMDQ0QwohRDkgVSswNDRCCiFEQSBVKzA0MzcKIURCIFUrMDQ0OAohREMgVSswNDRECiFERCBVKzA0NDkKIURFIFUrMDQ0NwohREYgVSswNDRBCiFFMCBVKzA0MkUKIUUxIFUrMDQxMAohRTIgVSswNDExCiFFMyBVKzA0MjYKIUU0IFUrMDQxNAohRTUgVSswNDE1CiFFNiBVKzA0MjQKIUU3IFUrMDQxMwohRTggVSswNDI1CiFFOSBVKzA0MTgKIUVBIFUrMDQxOQohRUIgVSswNDFBCiFFQyBVKzA0MUIKIUVEIFUrMDQxQwohRUUgVSswNDFECiFFRiBVKzA0MUUKIUYwIFUrMDQxRgohRjEgVSswNDJGCiFGMiBVKzA0MjAKIUYzIFUrMDQyMQohRjQgVSswNDIyCiFGNSBVKzA0MjMKIUY2IFUrMDQxNgohRjcgVSswNDEyCiFGOCBVKzA0MkMKIUY5IFUrMDQyQgohRkEgVSswNDE3CiFGQiBVKzA0MjgKIUZDIFUrMDQyRAohRkQgVSswNDI5CiFGRSBVKzA0MjcKIUZGIFUrMDQyQQo="),
];

/// The embedded map payload (base64) for an encoding, if supported.
pub(crate) fn lookup(name: &str) -> Option<&'static str> {
    ENCODINGS
        .iter()
        .find(|(encoding, _)| *encoding == name)
        .map(|(_, data)| *data)
}

/// Names of all supported encodings, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    ENCODINGS.iter().map(|(encoding, _)| *encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    #[test]
    fn test_lookup_known_encoding() {
        assert!(lookup("cp1252").is_some());
        assert!(lookup("koi8-u").is_some());
    }

    #[test]
    fn test_lookup_unknown_encoding() {
        assert!(lookup("cp866").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_names_cover_supported_set() {
        assert_eq!(names().count(), 20);
        assert!(names().any(|name| name == "iso-8859-15"));
    }

    #[test]
    fn test_all_maps_decode_to_map_lines() {
        for name in names() {
            let data = lookup(name).expect("listed encoding has a payload");
            let bytes = STANDARD.decode(data).expect("embedded payload is valid base64");
            let text = String::from_utf8(bytes).expect("map payload is UTF-8");
            for line in text.lines() {
                assert!(
                    line.starts_with('!') && line.contains(" U+"),
                    "{}: malformed map line {:?}",
                    name,
                    line
                );
            }
        }
    }
}
